//! Plain deep merge.
//!
//! [`merge_values`] is the merge used for plain objects: it never promotes
//! nested objects to records. [`Record::merge`](crate::Record::merge) builds
//! on it for slots that already hold a plain object.

use crate::keys::public_entries;
use crate::value::Value;

/// Deep-merge `src` into `dst`.
///
/// Both sides must be object-shaped, otherwise `dst` is left untouched. For
/// every public key of `src`:
/// - object onto object: recurse;
/// - anything else: overwrite (arrays are replaced, not concatenated).
pub fn merge_values(dst: &mut Value, src: &Value) {
    let (Some(target), Some(source)) = (dst.entries_mut(), src.entries()) else {
        return;
    };
    for (key, value) in public_entries(source) {
        match target.get_mut(key) {
            Some(current) if current.is_object() && value.is_object() => {
                merge_values(current, value);
            }
            _ => {
                target.insert(key.to_string(), value.clone());
            }
        }
    }
}
