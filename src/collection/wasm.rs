//! WASM bindings for the collection module.
//!
//! Exposes a `Collection<f64>` to JavaScript, since JS numbers are doubles.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use super::container::Collection;
use crate::error::CollectError;
use crate::numeric::sum_numbers;

/// Serialize a value to JsValue.
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new())
}

impl From<CollectError> for JsValue {
    fn from(err: CollectError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// JavaScript-friendly wrapper around a number collection.
#[wasm_bindgen]
pub struct JsNumberCollection {
    inner: Collection<f64>,
}

#[wasm_bindgen]
impl JsNumberCollection {
    /// Creates a new empty collection.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const c = new JsNumberCollection();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsNumberCollection {
        JsNumberCollection {
            inner: Collection::new(),
        }
    }

    /// Appends values in order.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// c.append(new Float64Array([1, 2, 3]));
    /// ```
    pub fn append(&mut self, values: &[f64]) {
        self.inner.append(values.iter().copied());
    }

    /// Returns a new collection with every value multiplied by `factor`.
    #[wasm_bindgen(js_name = mapScale)]
    pub fn map_scale(&self, factor: f64) -> JsNumberCollection {
        JsNumberCollection {
            inner: self.inner.map(|val| val * factor),
        }
    }

    /// Returns the values as a JS array.
    pub fn result(&self) -> Array {
        self.inner
            .iter()
            .map(|val| JsValue::from_f64(*val))
            .collect()
    }

    /// Returns the sum of all values.
    pub fn sum(&self) -> f64 {
        sum_numbers(self.inner.result())
    }

    /// Returns the number of values.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Converts to a plain JS value (array of numbers).
    #[wasm_bindgen(js_name = toJs)]
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner)?)
    }

    /// Serializes to a JSON string.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        let json = self.inner.to_json_value()?;
        Ok(json.to_string())
    }
}

impl Default for JsNumberCollection {
    fn default() -> Self {
        Self::new()
    }
}
