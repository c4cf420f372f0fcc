// The run configuration for a repeat search, built either from CLI flags
// or from a YAML override file, following the same two-source-of-truth
// pattern as `generate_reads/src/utils/config.rs`: a `ConfigBuilder` with
// defaults, overridden by whichever source is present. A `.` value in the
// YAML means "use the default", exactly as the teacher's `read_config_yaml`
// treats it.

use crate::error::RepeatsError;
use crate::graph::Scaling;
use crate::utils::cli::Cli;
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug)]
pub struct RunConfiguration {
    pub fasta_file: String,
    pub kmer_len: usize,
    pub abs_threshold: f64,
    pub rel_threshold: f64,
    pub scaling: Scaling,
    pub max_drop: i64,
    pub insert_pen: f64,
    pub gap_pen: f64,
    pub base_pen: f64,
    pub skip: i64,
    pub exact_match: usize,
    pub min_value: f64,
    pub fast_skip: bool,
}

impl RunConfiguration {
    pub fn build() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

pub struct ConfigBuilder {
    fasta_file: Option<String>,
    kmer_len: usize,
    abs_threshold: f64,
    rel_threshold: f64,
    scaling: String,
    max_drop: i64,
    insert_pen: f64,
    gap_pen: f64,
    base_pen: f64,
    skip: i64,
    exact_match: usize,
    min_value: Option<f64>,
    fast_skip: bool,
}

impl ConfigBuilder {
    pub fn new() -> ConfigBuilder {
        ConfigBuilder {
            fasta_file: None,
            kmer_len: 20,
            abs_threshold: 3.0,
            rel_threshold: 0.0,
            scaling: String::from("log1p"),
            max_drop: 200,
            insert_pen: 10.0,
            gap_pen: 10.0,
            base_pen: 2.0,
            skip: 0,
            exact_match: 7,
            min_value: None,
            fast_skip: true,
        }
    }

    pub fn set_fasta_file(mut self, fasta_file: String) -> ConfigBuilder {
        self.fasta_file = Some(fasta_file);
        self
    }
    pub fn set_kmer_len(mut self, kmer_len: usize) -> ConfigBuilder {
        self.kmer_len = kmer_len;
        self
    }
    pub fn set_abs_threshold(mut self, abs_threshold: f64) -> ConfigBuilder {
        self.abs_threshold = abs_threshold;
        self
    }
    pub fn set_rel_threshold(mut self, rel_threshold: f64) -> ConfigBuilder {
        self.rel_threshold = rel_threshold;
        self
    }
    pub fn set_scaling(mut self, scaling: String) -> ConfigBuilder {
        self.scaling = scaling;
        self
    }
    pub fn set_max_drop(mut self, max_drop: i64) -> ConfigBuilder {
        self.max_drop = max_drop;
        self
    }
    pub fn set_insert_pen(mut self, insert_pen: f64) -> ConfigBuilder {
        self.insert_pen = insert_pen;
        self
    }
    pub fn set_gap_pen(mut self, gap_pen: f64) -> ConfigBuilder {
        self.gap_pen = gap_pen;
        self
    }
    pub fn set_base_pen(mut self, base_pen: f64) -> ConfigBuilder {
        self.base_pen = base_pen;
        self
    }
    pub fn set_skip(mut self, skip: i64) -> ConfigBuilder {
        self.skip = skip;
        self
    }
    pub fn set_exact_match(mut self, exact_match: usize) -> ConfigBuilder {
        self.exact_match = exact_match;
        self
    }
    pub fn set_min_value(mut self, min_value: f64) -> ConfigBuilder {
        self.min_value = Some(min_value);
        self
    }

    pub fn build(self) -> Result<RunConfiguration, RepeatsError> {
        let fasta_file = self
            .fasta_file
            .ok_or_else(|| RepeatsError::Config("no FASTA file was specified".into()))?;
        let scaling = Scaling::from_str(&self.scaling).map_err(RepeatsError::Config)?;
        let min_value = self.min_value.unwrap_or(self.max_drop as f64);

        debug!("Running repeat search on {fasta_file} with k={}", self.kmer_len);
        debug!("  >abs-threshold: {}", self.abs_threshold);
        debug!("  >rel-threshold: {}", self.rel_threshold);
        debug!("  >scaling: {}", self.scaling);
        debug!("  >max-drop: {}, min-value: {min_value}", self.max_drop);

        Ok(RunConfiguration {
            fasta_file,
            kmer_len: self.kmer_len,
            abs_threshold: self.abs_threshold,
            rel_threshold: self.rel_threshold,
            scaling,
            max_drop: self.max_drop,
            insert_pen: self.insert_pen,
            gap_pen: self.gap_pen,
            base_pen: self.base_pen,
            skip: self.skip,
            exact_match: self.exact_match,
            min_value,
            fast_skip: self.fast_skip,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_config_yaml(yaml: &str) -> Result<RunConfiguration, RepeatsError> {
    let file = std::fs::File::open(yaml)?;
    let scrape_config: HashMap<String, String> =
        serde_yaml::from_reader(file).map_err(|e| RepeatsError::Config(e.to_string()))?;
    debug!("{:?}", scrape_config);

    let mut builder = ConfigBuilder::new();
    for (key, value) in scrape_config {
        if value == "." {
            continue;
        }
        match key.as_str() {
            "fasta_file" => builder = builder.set_fasta_file(value),
            "kmer_len" => builder = builder.set_kmer_len(parse(&key, &value)?),
            "abs_threshold" => builder = builder.set_abs_threshold(parse(&key, &value)?),
            "rel_threshold" => builder = builder.set_rel_threshold(parse(&key, &value)?),
            "scaling" => builder = builder.set_scaling(value),
            "max_drop" => builder = builder.set_max_drop(parse(&key, &value)?),
            "insert_pen" => builder = builder.set_insert_pen(parse(&key, &value)?),
            "gap_pen" => builder = builder.set_gap_pen(parse(&key, &value)?),
            "base_pen" => builder = builder.set_base_pen(parse(&key, &value)?),
            "skip" => builder = builder.set_skip(parse(&key, &value)?),
            "exact_match" => builder = builder.set_exact_match(parse(&key, &value)?),
            "min_value" => builder = builder.set_min_value(parse(&key, &value)?),
            _ => continue,
        }
    }
    if builder.fasta_file.is_none() {
        return Err(RepeatsError::Config("fasta_file was not specified in config".into()));
    }
    builder.build()
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, RepeatsError> {
    value
        .parse()
        .map_err(|_| RepeatsError::Config(format!("could not parse \"{value}\" for {key}")))
}

pub fn build_config_from_args(args: Cli) -> Result<RunConfiguration, RepeatsError> {
    let mut builder = ConfigBuilder::new()
        .set_fasta_file(args.fasta_file)
        .set_kmer_len(args.kmer_len)
        .set_abs_threshold(args.abs_threshold)
        .set_rel_threshold(args.rel_threshold)
        .set_scaling(args.scaling)
        .set_max_drop(args.max_drop)
        .set_insert_pen(args.insert_pen)
        .set_gap_pen(args.gap_pen)
        .set_base_pen(args.base_pen)
        .set_skip(args.skip)
        .set_exact_match(args.exact_match);

    if args.min_value >= 0.0 {
        builder = builder.set_min_value(args.min_value);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_source_argparse_defaults() {
        let config = ConfigBuilder::new().set_fasta_file("x.fa".into()).build().unwrap();
        assert_eq!(config.kmer_len, 20);
        assert_eq!(config.abs_threshold, 3.0);
        assert_eq!(config.max_drop, 200);
        assert_eq!(config.min_value, 200.0);
    }

    #[test]
    fn missing_fasta_file_is_an_error() {
        assert!(ConfigBuilder::new().build().is_err());
    }

    #[test]
    fn unknown_scaling_name_is_rejected() {
        let result = ConfigBuilder::new()
            .set_fasta_file("x.fa".into())
            .set_scaling("bogus".into())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn explicit_min_value_overrides_the_max_drop_default() {
        let config = ConfigBuilder::new()
            .set_fasta_file("x.fa".into())
            .set_max_drop(200)
            .set_min_value(50.0)
            .build()
            .unwrap();
        assert_eq!(config.min_value, 50.0);
    }
}
