//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes an input name, the expected request, a simulated
//! response, and either the expected record or the expected error kind.

use fruit_core::{FruitClient, FruitError, FruitRecord, HttpResponse, Url};

const BASE_URL: &str = "http://localhost:3000/api/fruit";

fn client() -> FruitClient {
    FruitClient::new(Url::parse(BASE_URL).unwrap())
}

fn error_kind(err: &FruitError) -> &'static str {
    match err {
        FruitError::InvalidInput(_) => "InvalidInput",
        FruitError::Unreachable(_) => "Unreachable",
        FruitError::NotFound { .. } => "NotFound",
        FruitError::ApiError { .. } => "ApiError",
    }
}

#[test]
fn get_fruit_test_vectors() {
    let raw = include_str!("../../test-vectors/get_fruit.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = case["input_name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_get_fruit(input).unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
        };
        let result = c.parse_get_fruit(input, response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(error_kind(&err), expected_error.as_str().unwrap(), "{name}: error kind");
        } else {
            let record = result.unwrap();
            let expected: FruitRecord = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(record, expected, "{name}: parsed result");
        }
    }
}

#[test]
fn blank_names_never_build_a_request() {
    let c = client();
    for input in ["", " ", "\t", "\r\n  "] {
        let err = c.build_get_fruit(input).unwrap_err();
        assert_eq!(error_kind(&err), "InvalidInput", "{input:?}");
        assert_eq!(err.to_string(), "Fruit name can't be empty");
    }
}
