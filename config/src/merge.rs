use serde_json::{Map, Value};

/// Recursively merges `new` into `orig`. When both sides hold a mapping for
/// the same key the mappings are merged key by key, so sibling keys of `orig`
/// that `new` does not mention survive at every depth. Any other overlap
/// (scalar, list, null, or mismatched types) replaces the destination value
/// wholesale; lists are never concatenated or element-merged. A null value
/// present in `new` overwrites, which is distinct from the key being absent.
pub fn merge_values(orig: &mut Value, new: &Value) {
    match (orig, new) {
        (Value::Object(orig_map), Value::Object(new_map)) => {
            for (key, value) in new_map {
                match orig_map.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        orig_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (orig, new) => {
            *orig = new.clone();
        }
    }
}

/// Merges every key of `new` into `orig` with [`merge_values`] semantics.
pub fn merge_maps(orig: &mut Map<String, Value>, new: &Map<String, Value>) {
    for (key, value) in new {
        match orig.get_mut(key) {
            Some(existing) => merge_values(existing, value),
            None => {
                orig.insert(key.clone(), value.clone());
            }
        }
    }
}
