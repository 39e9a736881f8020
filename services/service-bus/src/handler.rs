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

//! HTTP adapter around [`TokenIssuer`].

use http::header::{ACCEPT, CONTENT_TYPE};
use http::request::Parts;
use http::{HeaderMap, HeaderValue, Method, Response, StatusCode};
use log::{debug, info, warn};

use crate::constants::*;
use crate::{TokenIssuer, TokenParams};

/// StatusMode decides the status code used for missing parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMode {
    /// Missing parameters are answered with `200 OK`, the body carrying the
    /// error message. Existing clients rely on this.
    #[default]
    Compatible,
    /// Missing parameters are answered with `400 Bad Request`.
    Strict,
}

/// Handle a token request.
///
/// Parameters are read from the query string. A `POST` with a form encoded
/// body contributes the parameters the query string lacks. The body is never
/// a reason to reject a request.
///
/// The body of the response is the token, or the error message if no token
/// could be issued.
pub fn handle(
    issuer: &TokenIssuer,
    parts: &Parts,
    body: &[u8],
    mode: StatusMode,
) -> Response<String> {
    info!("SAS Token trigger function processed a request.");

    let json = accepts_json(&parts.headers);
    match extract_params(parts, body).issue(issuer) {
        Ok(token) => respond(StatusCode::OK, token.to_string(), json),
        Err(err) if err.is_missing_parameter() => {
            debug!("token request rejected: {}", err.kind());
            let status = match mode {
                StatusMode::Compatible => StatusCode::OK,
                StatusMode::Strict => StatusCode::BAD_REQUEST,
            };
            respond(status, err.to_string(), json)
        }
        Err(err) => {
            warn!("token request is invalid: {err:?}");
            respond(StatusCode::BAD_REQUEST, err.to_string(), json)
        }
    }
}

/// Extract token parameters from a request.
pub fn extract_params(parts: &Parts, body: &[u8]) -> TokenParams {
    let mut params = query_params(parts);

    if accepts_form(parts) {
        params.merge_form(body);
    }

    params
}

/// Check whether [`handle`] would look at the body of this request.
///
/// Only a form `POST` whose query string lacks a parameter needs one, so
/// callers can skip reading the body otherwise.
pub fn needs_body(parts: &Parts) -> bool {
    accepts_form(parts) && !query_params(parts).is_complete()
}

fn query_params(parts: &Parts) -> TokenParams {
    TokenParams::from_query(parts.uri.query().unwrap_or_default())
}

fn accepts_form(parts: &Parts) -> bool {
    parts.method == Method::POST && is_form(&parts.headers)
}

fn respond(status: StatusCode, text: String, json: bool) -> Response<String> {
    let (content_type, body) = if json {
        (
            APPLICATION_JSON_UTF8,
            serde_json::Value::String(text).to_string(),
        )
    } else {
        (TEXT_PLAIN_UTF8, text)
    };

    let mut resp = Response::new(body);
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    resp
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|media| media_type_is(media, APPLICATION_JSON))
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| media_type_is(v, APPLICATION_WWW_FORM_URLENCODED))
}

/// Compare the essence of a media range, ignoring parameters and case.
fn media_type_is(media: &str, expected: &str) -> bool {
    media
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use pretty_assertions::assert_eq;
    use sastoken_core::time::from_unix;
    use test_case::test_case;

    const TOKEN: &str = "SharedAccessSignature sr=https%3A%2F%2Fexample.servicebus.windows.net%2Fmyqueue&sig=juuYeBK4k9Mpn5x8xeEcQjfa42jzw6OSFTul5js4nL0%3D&se=1700604800&skn=RootManageSharedAccessKey";
    const FORM: &str = "application/x-www-form-urlencoded";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new().with_time(from_unix(1_700_000_000).unwrap())
    }

    fn parts(method: Method, uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().method(method).uri(uri);
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_handle_get() {
        let req = parts(
            Method::GET,
            "/api/SASToken?uri=https%3A%2F%2Fexample.servicebus.windows.net%2Fmyqueue&keyName=RootManageSharedAccessKey&key=abcd1234",
            &[],
        );
        let resp = handle(&issuer(), &req, b"", StatusMode::Compatible);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], TEXT_PLAIN_UTF8);
        assert_eq!(resp.body(), TOKEN);
    }

    #[test_case(StatusMode::Compatible, StatusCode::OK; "compatible")]
    #[test_case(StatusMode::Strict, StatusCode::BAD_REQUEST; "strict")]
    fn test_handle_missing(mode: StatusMode, status: StatusCode) {
        let req = parts(Method::GET, "/api/SASToken?keyName=n", &[]);
        let resp = handle(&issuer(), &req, b"", mode);

        assert_eq!(resp.status(), status);
        assert_eq!(resp.body(), "key parameter cannot be null");
    }

    #[test]
    fn test_handle_post_form() {
        let req = parts(
            Method::POST,
            "/api/SASToken?keyName=RootManageSharedAccessKey",
            &[(
                "content-type",
                "application/x-www-form-urlencoded; charset=utf-8",
            )],
        );
        let body = b"uri=https%3A%2F%2Fexample.servicebus.windows.net%2Fmyqueue&key=abcd1234&keyName=ignored";
        let resp = handle(&issuer(), &req, body, StatusMode::Compatible);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.body(), TOKEN);
    }

    #[test]
    fn test_handle_post_ignores_non_form_body() {
        let req = parts(
            Method::POST,
            "/api/SASToken",
            &[("content-type", "application/json")],
        );
        let resp = handle(&issuer(), &req, br#"{"key":"k"}"#, StatusMode::Compatible);

        assert_eq!(resp.body(), "key parameter cannot be null");
    }

    #[test]
    fn test_handle_undecodable_form_body_with_full_query() {
        let req = parts(
            Method::POST,
            "/api/SASToken?uri=https%3A%2F%2Fexample.servicebus.windows.net%2Fmyqueue&keyName=RootManageSharedAccessKey&key=abcd1234",
            &[("content-type", "application/x-www-form-urlencoded")],
        );
        let resp = handle(&issuer(), &req, &[0xff], StatusMode::Strict);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.body(), TOKEN);
    }

    #[test]
    fn test_handle_undecodable_form_body_is_lossy() {
        let req = parts(
            Method::POST,
            "/api/SASToken?keyName=n&key=k",
            &[("content-type", "application/x-www-form-urlencoded")],
        );
        let resp = handle(&issuer(), &req, b"uri=sb\xff", StatusMode::Strict);

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.body().starts_with("SharedAccessSignature sr=sb%EF%BF%BD&sig="));
    }

    #[test_case(Method::POST, "/api/SASToken?uri=u&keyName=n", FORM, true; "form post missing key")]
    #[test_case(Method::POST, "/api/SASToken?uri=u&keyName=n&key=k", FORM, false; "form post complete")]
    #[test_case(Method::POST, "/api/SASToken", "application/json", false; "json post")]
    #[test_case(Method::GET, "/api/SASToken", FORM, false; "get")]
    fn test_needs_body(method: Method, uri: &str, content_type: &str, expected: bool) {
        let req = parts(method, uri, &[("content-type", content_type)]);
        assert_eq!(needs_body(&req), expected);
    }

    #[test]
    fn test_handle_json() {
        let req = parts(
            Method::GET,
            "/api/SASToken?key=k",
            &[("accept", "text/html, application/json;q=0.9")],
        );
        let resp = handle(&issuer(), &req, b"", StatusMode::Compatible);

        assert_eq!(resp.headers()[CONTENT_TYPE], APPLICATION_JSON_UTF8);
        assert_eq!(resp.body(), r#""keyName parameter cannot be null""#);
    }

    #[test_case("application/json", true; "exact")]
    #[test_case("Application/JSON; charset=utf-8", true; "case and params")]
    #[test_case("text/plain", false; "plain")]
    #[test_case("application/jsonp", false; "prefix only")]
    fn test_media_type_is(media: &str, expected: bool) {
        assert_eq!(media_type_is(media, APPLICATION_JSON), expected);
    }
}
