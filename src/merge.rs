use serde_json::{Map, Value};

/// Deep-merge `overlay` on top of `base`.
/// If both sides have an object for the same key, recurse.
/// Otherwise, `overlay`'s value wins.
pub fn deep_merge(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, overlay_val) in overlay {
        match (base.remove(&key), overlay_val) {
            (Some(Value::Object(base_obj)), Value::Object(overlay_obj)) => {
                base.insert(key, Value::Object(deep_merge(base_obj, overlay_obj)));
            }
            (_, overlay_val) => {
                base.insert(key, overlay_val);
            }
        }
    }
    base
}

/// Reshape HCL block lists to fit the target document.
///
/// HCL decoders may represent a block as a list of bodies even when it occurs
/// once. Wherever `shape` holds an object and `overlay` holds a list of
/// objects, the list is collapsed into one object (later blocks win).
/// Lists the target really expects are left alone, and so is anything
/// under a `null` in `shape` (an unset `Option<Struct>`).
pub fn collapse_blocks(overlay: Value, shape: &Value) -> Value {
    match (overlay, shape) {
        (Value::Array(items), Value::Object(_)) if items.iter().all(Value::is_object) => {
            let collapsed = items.into_iter().fold(Map::new(), |acc, item| match item {
                Value::Object(obj) => deep_merge(acc, obj),
                _ => acc,
            });
            collapse_blocks(Value::Object(collapsed), shape)
        }
        (Value::Object(obj), Value::Object(shape_obj)) => Value::Object(
            obj.into_iter()
                .map(|(key, value)| {
                    let value = match shape_obj.get(&key) {
                        Some(sub_shape) => collapse_blocks(value, sub_shape),
                        None => value,
                    };
                    (key, value)
                })
                .collect(),
        ),
        (overlay, _) => overlay,
    }
}
