use rand::RngCore;

use datamorph_core::PhoneShape;

use super::push_digits;

pub(super) fn generate_phone(shape: &PhoneShape, rng: &mut dyn RngCore) -> String {
    let mut out = shape.country_prefix.clone().unwrap_or_default();
    for (index, len) in shape.groupings.iter().enumerate() {
        if index == 0 && shape.has_parens_for_first_group {
            out.push('(');
            push_digits(&mut out, *len, rng);
            out.push(')');
        } else {
            push_digits(&mut out, *len, rng);
        }
        if let Some(Some(separator)) = shape.separators.get(index) {
            out.push(*separator);
        }
    }
    out
}
