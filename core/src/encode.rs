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

//! URL encoding used inside SAS tokens.

/// Encode input with the `application/x-www-form-urlencoded` rules.
///
/// - ASCII alphanumerics and `*`, `-`, `.`, `_` are kept as is.
/// - Space is encoded as `+`.
/// - Every other byte of the UTF-8 input is encoded as `%XX` with upper-case hex.
///
/// The output decodes back to the input with any standard form decoder.
pub fn url_encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", ""; "empty")]
    #[test_case("abcXYZ019", "abcXYZ019"; "alphanumeric")]
    #[test_case("*-._", "*-._"; "kept punctuation")]
    #[test_case("a b", "a+b"; "space")]
    #[test_case(
        "https://example.servicebus.windows.net/myqueue",
        "https%3A%2F%2Fexample.servicebus.windows.net%2Fmyqueue";
        "resource uri"
    )]
    #[test_case("a+b/c=", "a%2Bb%2Fc%3D"; "base64 symbols")]
    #[test_case("q?x=1&y=2", "q%3Fx%3D1%26y%3D2"; "query delimiters")]
    #[test_case("~!()", "%7E%21%28%29"; "other punctuation")]
    #[test_case("é", "%C3%A9"; "utf8")]
    fn test_url_encode(input: &str, expected: &str) {
        assert_eq!(url_encode(input), expected);
    }

    #[test]
    fn test_url_encode_round_trips() {
        let input = "sb://my ns.servicebus.windows.net/q?x=1&y=2#frag";
        let encoded = url_encode(input);

        let decoded: String = form_urlencoded::parse(format!("v={encoded}").as_bytes())
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(decoded, input);
    }
}
