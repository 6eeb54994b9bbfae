//! Synthetic knapsack instances for the optimizer.
//!
//! File layout:
//!
//! ```text
//! security van capacity: 295
//!  bag 1:
//!   weight: 4.2
//!   value: 57
//!  ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_CAPACITY: u32 = 295;
pub const DEFAULT_ITEM_COUNT: usize = 500;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 1.0..=10.0;
pub const VALUE_RANGE: RangeInclusive<u32> = 10..=100;

/// Size and capacity of an instance to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkSpec {
    pub capacity: u32,
    pub item_count: usize,
}

impl Default for BenchmarkSpec {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            item_count: DEFAULT_ITEM_COUNT,
        }
    }
}

impl BenchmarkSpec {
    /// Default output file name, e.g. `problem500.txt`
    pub fn default_file_name(&self) -> String {
        format!("problem{}.txt", self.item_count)
    }
}

/// One bag: weight with one decimal place, integer value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkItem {
    pub weight: f64,
    pub value: u32,
}

pub fn generate_items<R: Rng>(spec: &BenchmarkSpec, rng: &mut R) -> Vec<BenchmarkItem> {
    (0..spec.item_count)
        .map(|_| {
            let weight = rng.random_range(WEIGHT_RANGE);
            BenchmarkItem {
                weight: (weight * 10.0).round() / 10.0,
                value: rng.random_range(VALUE_RANGE),
            }
        })
        .collect()
}

pub fn write_instance<W: Write>(
    writer: &mut W,
    spec: &BenchmarkSpec,
    items: &[BenchmarkItem],
) -> io::Result<()> {
    writeln!(writer, "security van capacity: {}", spec.capacity)?;
    for (i, item) in items.iter().enumerate() {
        writeln!(writer, " bag {}:", i + 1)?;
        writeln!(writer, "  weight: {:.1}", item.weight)?;
        writeln!(writer, "  value: {}", item.value)?;
    }
    Ok(())
}

/// Generate an instance and write it to `path`.
///
/// With a seed the output is reproducible; without one the generator is
/// seeded from the OS.
pub fn write_instance_file(path: &Path, spec: &BenchmarkSpec, seed: Option<u64>) -> io::Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let items = generate_items(spec, &mut rng);

    let mut writer = BufWriter::new(File::create(path)?);
    write_instance(&mut writer, spec, &items)?;
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        items = items.len(),
        capacity = spec.capacity,
        "Wrote benchmark instance"
    );
    Ok(())
}
