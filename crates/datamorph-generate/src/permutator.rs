use rand::RngCore;
use tracing::debug;

use datamorph_core::{FormatRegistry, Shape, ShapeFamily, is_blank};

use crate::errors::GenerationError;
use crate::generators::ValueGenerator;
use crate::model::{ColumnReport, MaskOptions, PermutationMode};

/// Replacement values for one column, in input order.
#[derive(Debug, Clone)]
pub struct PermutedColumn {
    pub values: Vec<String>,
    pub report: ColumnReport,
}

/// Which matchers a column is classified with.
#[derive(Debug, Clone, Copy)]
enum Scope {
    AnyFamily,
    Family(ShapeFamily),
    /// Column-uniform mode found no usable first value.
    Nothing,
}

/// Classifies and regenerates a whole column.
#[derive(Debug)]
pub struct ColumnPermutator {
    registry: FormatRegistry,
    generator: ValueGenerator,
    mode: PermutationMode,
    max_attempts: u32,
}

impl ColumnPermutator {
    pub fn new(
        registry: FormatRegistry,
        generator: ValueGenerator,
        mode: PermutationMode,
        max_attempts: u32,
    ) -> Self {
        Self {
            registry,
            generator,
            mode,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_options(options: &MaskOptions) -> Result<Self, GenerationError> {
        options.validate()?;
        let registry = FormatRegistry::new(&options.match_options())?;
        let generator = ValueGenerator::new(options.year_min, options.year_max)?;
        Ok(Self::new(
            registry,
            generator,
            options.mode,
            options.max_attempts,
        ))
    }

    pub fn mode(&self) -> PermutationMode {
        self.mode
    }

    /// Produce one replacement per input value. Length and order are kept.
    pub fn permute<S: AsRef<str>>(&self, values: &[S], rng: &mut dyn RngCore) -> PermutedColumn {
        let scope = self.scope(values);
        let mut report = ColumnReport::new(self.mode);
        if let Scope::Family(family) = scope {
            report.dominant_family = Some(family);
        }

        let mut permuted = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let raw = value.as_ref();
            let shape = self.classify(raw, scope);
            match shape.family() {
                Some(family) => {
                    let (replacement, retries, stable) = self.regenerate(&shape, raw, scope, rng);
                    if !stable {
                        debug!(index, family = %family, "regeneration kept an unstable candidate");
                    }
                    report.record_regenerated(family, retries, stable);
                    permuted.push(replacement);
                }
                None => {
                    debug!(index, "value passed through");
                    report.record_pass_through();
                    permuted.push(raw.to_string());
                }
            }
        }

        PermutedColumn {
            values: permuted,
            report,
        }
    }

    fn scope<S: AsRef<str>>(&self, values: &[S]) -> Scope {
        match self.mode {
            PermutationMode::PerValue => Scope::AnyFamily,
            PermutationMode::ColumnUniform => values
                .iter()
                .map(AsRef::as_ref)
                .find(|raw| !is_blank(raw))
                .and_then(|raw| self.registry.classify(raw).family())
                .map_or(Scope::Nothing, Scope::Family),
        }
    }

    fn classify(&self, raw: &str, scope: Scope) -> Shape {
        match scope {
            Scope::AnyFamily => self.registry.classify(raw),
            Scope::Family(family) => self.registry.classify_family(raw, family),
            Scope::Nothing => Shape::Unmatched,
        }
    }

    /// Draw candidates until one classifies back to `shape`, keeping the
    /// last one once attempts run out.
    fn regenerate(
        &self,
        shape: &Shape,
        raw: &str,
        scope: Scope,
        rng: &mut dyn RngCore,
    ) -> (String, u32, bool) {
        let mut retries = 0;
        loop {
            let candidate = self.generator.generate(shape, raw, rng);
            let stable = self.classify(&candidate, scope) == *shape;
            if stable || retries + 1 >= self.max_attempts {
                return (candidate, retries, stable);
            }
            retries += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn permutator(mode: PermutationMode) -> ColumnPermutator {
        let options = MaskOptions {
            mode,
            ..MaskOptions::default()
        };
        ColumnPermutator::from_options(&options).expect("valid options")
    }

    #[test]
    fn column_uniform_passes_through_other_families() {
        let permutator = permutator(PermutationMode::ColumnUniform);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let values = ["", "2021-03-15", "(555) 123-4567", "15/03/2021"];

        let column = permutator.permute(&values, &mut rng);

        assert_eq!(column.values.len(), 4);
        assert_eq!(column.values[0], "");
        assert_ne!(column.values[1], "2021-03-15");
        assert_eq!(column.values[2], "(555) 123-4567");
        assert_ne!(column.values[3], "15/03/2021");
        assert_eq!(column.report.dominant_family, Some(ShapeFamily::Date));
        assert_eq!(column.report.regenerated, 2);
        assert_eq!(column.report.passed_through, 2);
    }

    #[test]
    fn column_uniform_with_unmatched_first_value_passes_everything() {
        let permutator = permutator(PermutationMode::ColumnUniform);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let values = ["hello world", "2021-03-15"];

        let column = permutator.permute(&values, &mut rng);

        assert_eq!(column.values, vec!["hello world", "2021-03-15"]);
        assert_eq!(column.report.dominant_family, None);
    }

    #[test]
    fn per_value_counts_families() {
        let permutator = permutator(PermutationMode::PerValue);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let values = vec![
            "2021-03-15".to_string(),
            "$9.00".to_string(),
            "AB-12".to_string(),
            "   ".to_string(),
        ];

        let column = permutator.permute(&values, &mut rng);

        assert_eq!(column.report.values, 4);
        assert_eq!(column.report.by_family.get("date"), Some(&1));
        assert_eq!(column.report.by_family.get("currency"), Some(&1));
        assert_eq!(column.report.by_family.get("generic"), Some(&1));
        assert_eq!(column.values[3], "   ");
    }
}
