use rand::{Rng, RngCore};

use datamorph_core::{GenericShape, Token};

use super::random_digit;

pub(super) fn generate_template(shape: &GenericShape, rng: &mut dyn RngCore) -> String {
    shape
        .template
        .iter()
        .map(|token| match token {
            Token::Digit => random_digit(rng),
            Token::Upper => char::from(b'A' + rng.random_range(0..26_u8)),
            Token::Lower => char::from(b'a' + rng.random_range(0..26_u8)),
            Token::Literal(ch) => *ch,
        })
        .collect()
}
