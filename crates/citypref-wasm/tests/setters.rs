//! Setter input handling at the JS boundary. Needs a JS host.
#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use citypref_wasm::{
    get_business_type, get_business_type_count, get_city, get_city_count, set_business_types,
    set_cities,
};

fn cities() -> Vec<Option<String>> {
    (0..get_city_count()).map(get_city).collect()
}

fn business_types() -> Vec<Option<String>> {
    (0..get_business_type_count()).map(get_business_type).collect()
}

fn mixed_array() -> JsValue {
    let arr = Array::new();
    arr.push(&JsValue::from_str("Regina"));
    arr.push(&JsValue::from_f64(42.0));
    arr.into()
}

fn invalid_inputs() -> Vec<JsValue> {
    vec![
        JsValue::NULL,
        JsValue::UNDEFINED,
        JsValue::from_str("Toronto"),
        Array::new().into(),
        mixed_array(),
    ]
}

#[wasm_bindgen_test]
fn set_cities_ignores_non_list_input() {
    citypref_wasm::start();
    let before = cities();

    for input in invalid_inputs() {
        assert!(!set_cities(input));
        assert_eq!(cities(), before);
    }
}

#[wasm_bindgen_test]
fn set_business_types_ignores_non_list_input() {
    citypref_wasm::start();
    let before = business_types();

    for input in invalid_inputs() {
        assert!(!set_business_types(input));
        assert_eq!(business_types(), before);
    }
}

#[wasm_bindgen_test]
fn set_business_types_accepts_string_array() {
    citypref_wasm::start();

    let arr = Array::new();
    arr.push(&JsValue::from_str("retail"));
    arr.push(&JsValue::from_str("food"));
    assert!(set_business_types(arr.into()));
    assert_eq!(
        business_types(),
        [Some("retail".to_string()), Some("food".to_string())]
    );
}
