// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! HTTP server handing out tokens.
//!
//! The endpoint is anonymous and accepts `GET` and `POST`:
//!
//! ```text
//! GET /api/SASToken?uri=<resource>&keyName=<policy>&key=<key>
//! ```

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{error, info, warn};
use sastoken_core::Error;
use sastoken_service_bus::handler;
use sastoken_service_bus::{StatusMode, TokenIssuer};
use tokio::net::TcpListener;
use tokio::signal;

use crate::Config;

/// Largest request body read for form parameters.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// State shared by all requests.
#[derive(Debug, Clone)]
struct AppState {
    issuer: TokenIssuer,
    status_mode: StatusMode,
}

/// Build the router serving the token endpoint at `config.route`.
pub fn router(config: &Config) -> Router {
    router_with_issuer(config, TokenIssuer::new())
}

/// Build the router with a custom issuer.
///
/// Used by tests to freeze the clock.
pub fn router_with_issuer(config: &Config, issuer: TokenIssuer) -> Router {
    let state = Arc::new(AppState {
        issuer,
        status_mode: config.status_mode,
    });

    Router::new()
        .route(&config.route, get(issue_token).post(issue_token))
        .with_state(state)
}

async fn issue_token(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();

    let body = if handler::needs_body(&parts) {
        match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(body) => body,
            Err(err) => {
                let err = Error::request_invalid("request body is invalid").with_source(err);
                warn!("failed to read token request body: {err:?}");
                return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
            }
        }
    } else {
        Bytes::new()
    };

    handler::handle(&state.issuer, &parts, &body, state.status_mode)
        .map(Body::from)
        .into_response()
}

/// Serve tokens until a shutdown signal arrives.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        "token server listening on {} at {}",
        listener.local_addr()?,
        config.route
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("token server shutdown complete");
    Ok(())
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received SIGINT, starting graceful shutdown"),
            Err(e) => error!("failed to listen for SIGINT: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received SIGTERM, starting graceful shutdown");
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
