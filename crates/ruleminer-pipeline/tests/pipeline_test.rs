//! End-to-end tests for the `RuleMiner` pipeline.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use ruleminer_core::config::{ArmParams, PrefixFilterConfig, RuleMinerConfig};
use ruleminer_core::errors::{FeatureError, PipelineError, RuleMinerErrorCode};
use ruleminer_core::types::{AssociationRule, Item, Itemset};
use ruleminer_mining::{FilterRegistry, RuleFilter, TransactionDataset};
use ruleminer_pipeline::{RelationMatrix, RuleMiner};

fn basket() -> TransactionDataset {
    TransactionDataset::from_rows(vec![
        vec!["bread", "milk"],
        vec!["bread", "butter", "milk"],
        vec!["bread", "butter"],
        vec!["milk", "eggs"],
        vec!["bread", "milk", "eggs"],
        vec!["bread", "butter", "milk", "eggs"],
    ])
    .unwrap()
}

fn config(dir: &Path, threads: usize) -> RuleMinerConfig {
    let mut config = RuleMinerConfig::default();
    config.files.work_dir = Some(dir.to_path_buf());
    config.mining.threads = Some(threads);
    config
}

fn params() -> ArmParams {
    ArmParams {
        min_support: 0.3,
        min_confidence: 0.5,
        itemset_max_size: 3,
    }
}

fn miner(dir: &TempDir, threads: usize) -> RuleMiner {
    RuleMiner::new(config(dir.path(), threads))
        .unwrap()
        .with_dataset(basket())
}

#[test]
fn full_pipeline_produces_consistent_artifacts() {
    let dir = TempDir::new().unwrap();
    let miner = miner(&dir, 3);
    let rules = miner.run_full_pipeline(&params()).unwrap();
    assert!(rules > 0);

    for (_, path) in miner.shards().iter() {
        assert!(path.exists());
    }

    let (vectors, lengths, schema) = miner.load_feature_vectors().unwrap();
    assert_eq!(vectors.len(), rules);
    assert_eq!(lengths.len(), rules);
    assert!(vectors.iter().all(|v| v.len() == schema.dimension()));

    let loaded = miner.load_association_rules().unwrap();
    assert_eq!(loaded.len(), rules);
    assert_eq!(miner.load_rules_as_dict().unwrap().len(), rules);

    let (by_text, schema2) = miner.load_rules_and_features().unwrap();
    assert_eq!(schema, schema2);
    assert_eq!(by_text.len(), rules);
}

#[test]
fn confidence_equals_both_over_left_exactly() {
    let dir = TempDir::new().unwrap();
    let miner = miner(&dir, 2);
    miner.run_full_pipeline(&params()).unwrap();

    let rules = miner.load_association_rules().unwrap();
    let itemsets = miner.load_frequent_itemsets_as_dict().unwrap();
    let confidence = miner.compute_confidence(&rules).unwrap();
    for rule in &rules {
        let combo = itemsets.frequency_combo(rule).unwrap();
        let (conf, both) = confidence[&rule.serialize()];
        assert_eq!(conf, combo.both as f64 / combo.left as f64);
        assert_eq!(both, combo.both);
        assert!(conf >= params().min_confidence);
    }
}

#[test]
fn interestingness_writes_one_line_per_rule() {
    let dir = TempDir::new().unwrap();
    let miner = miner(&dir, 2);
    let rules = miner.run_full_pipeline(&params()).unwrap();

    let output = dir.path().join("interestingness.txt");
    assert_eq!(miner.compute_interestingness(&output).unwrap(), rules);

    let content = fs::read_to_string(&output).unwrap();
    let expected: Vec<String> = miner
        .load_association_rules()
        .unwrap()
        .iter()
        .map(AssociationRule::serialize)
        .collect();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), rules);
    for (line, rule) in lines.iter().zip(&expected) {
        let columns: Vec<&str> = line.split(';').collect();
        assert_eq!(columns.len(), 33);
        assert_eq!(columns[0], rule);
        let confidence: f64 = columns[1].parse().unwrap();
        assert!(confidence >= 0.5);
    }
}

#[test]
fn feature_extraction_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let miner = miner(&dir, 2);
    miner.run_full_pipeline(&params()).unwrap();
    let first = fs::read_to_string(miner.files().feature_file()).unwrap();
    miner.extract_features_for_all_rules().unwrap();
    let second = fs::read_to_string(miner.files().feature_file()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn stages_out_of_order_are_precondition_faults() {
    let dir = TempDir::new().unwrap();
    let miner = miner(&dir, 2);

    let err = miner.generate_association_rules(&params()).unwrap_err();
    assert_eq!(err.error_code(), "PRECONDITION");
    let err = miner.extract_features_for_all_rules().unwrap_err();
    assert_eq!(err.error_code(), "PRECONDITION");
    let err = miner
        .compute_interestingness(&dir.path().join("out.txt"))
        .unwrap_err();
    assert_eq!(err.error_code(), "PRECONDITION");
    assert_eq!(miner.load_feature_vectors().unwrap_err().error_code(), "PRECONDITION");

    miner.generate_frequent_itemsets(&params()).unwrap();
    let err = miner.extract_features_for_all_rules().unwrap_err();
    assert_eq!(err.error_code(), "PRECONDITION");
}

#[test]
fn mining_without_a_dataset_is_a_precondition_fault() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 1)).unwrap();
    assert!(matches!(
        miner.generate_frequent_itemsets(&params()),
        Err(PipelineError::Precondition { .. })
    ));
    assert!(matches!(
        miner.get_feature_names(),
        Err(PipelineError::Precondition { .. })
    ));
}

#[test]
fn unknown_filter_fails_at_construction() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), 1);
    config.mining.filter = Some("nope".to_string());
    let err = RuleMiner::new(config).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

/// Only `milk` may be predicted; it never appears on the left.
#[derive(Debug)]
struct PredictsMilk;

impl RuleFilter for PredictsMilk {
    fn name(&self) -> &str {
        "predicts-milk"
    }

    fn accepts_left_item(&self, item: &Item) -> bool {
        item.as_str() != "milk"
    }

    fn accepts_right_item(&self, item: &Item) -> bool {
        item.as_str() == "milk"
    }
}

#[test]
fn registered_bundle_is_selectable_by_name() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), 2);
    config.mining.filter = Some("predicts-milk".to_string());

    let mut registry = FilterRegistry::with_builtins();
    registry.register(Arc::new(PredictsMilk)).unwrap();
    let miner = RuleMiner::with_registry(config, &registry)
        .unwrap()
        .with_dataset(basket());
    assert_eq!(miner.filter().name(), "predicts-milk");

    let rules = miner.run_full_pipeline(&params()).unwrap();
    assert!(rules > 0);
    let rules = miner.load_association_rules().unwrap();
    for rule in &rules {
        assert_eq!(rule.right().serialize(), "milk", "{rule}");
    }
}

fn write_itemsets(dir: &Path, content: &str) {
    fs::write(dir.join("itemsets.txt"), content).unwrap();
}

fn write_features(dir: &Path, content: &str) {
    fs::write(dir.join("features.txt"), content).unwrap();
}

#[test]
fn missing_frequency_combo_fails_fast() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 1)).unwrap();
    write_itemsets(dir.path(), "10\n4\ta\n3\tb\n");
    write_features(dir.path(), "0\n0\n[\"a>b\",[]]\n");

    let err = miner
        .compute_interestingness(&dir.path().join("out.txt"))
        .unwrap_err();
    assert_eq!(err.error_code(), "DATA_INTEGRITY");
    let rule = AssociationRule::parse("a>b").unwrap();
    assert_eq!(miner.compute_confidence(&[rule]).unwrap_err().error_code(), "DATA_INTEGRITY");
}

#[test]
fn failed_interestingness_run_keeps_previous_output() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 1)).unwrap();
    let output = dir.path().join("out.txt");
    write_itemsets(dir.path(), "10\n4\ta\n3\tb\n2\ta,b\n");
    write_features(dir.path(), "0\n0\n[\"a>b\",[]]\n");
    assert_eq!(miner.compute_interestingness(&output).unwrap(), 1);
    let previous = fs::read_to_string(&output).unwrap();

    // The second rule's union {a,c} was never mined.
    write_itemsets(dir.path(), "10\n4\ta\n3\tb\n1\tc\n2\ta,b\n");
    write_features(dir.path(), "0\n0\n[\"a>b\",[]]\n[\"a>c\",[]]\n");
    let err = miner.compute_interestingness(&output).unwrap_err();
    assert_eq!(err.error_code(), "DATA_INTEGRITY");
    assert_eq!(fs::read_to_string(&output).unwrap(), previous);
}

/// Scores one pair as +inf and everything else as 0.5.
#[derive(Debug)]
struct UnboundedMatrix;

impl RelationMatrix for UnboundedMatrix {
    fn items(&self) -> Vec<Item> {
        ["bread", "milk"].into_iter().map(|s| Item::new(s).unwrap()).collect()
    }

    fn value(&self, item: &Item, feature: &Item) -> f64 {
        if item.as_str() == "bread" && feature.as_str() == "milk" {
            f64::INFINITY
        } else {
            0.5
        }
    }
}

#[test]
fn non_finite_relation_value_stops_feature_extraction() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 2))
        .unwrap()
        .with_relation_matrix(Arc::new(UnboundedMatrix))
        .with_dataset(basket());
    miner.generate_frequent_itemsets(&params()).unwrap();
    miner.generate_association_rules(&params()).unwrap();

    let err = miner.extract_features_for_all_rules().unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Feature(FeatureError::NonFiniteValue { .. })
    ));
    assert_eq!(err.error_code(), "FEATURE_SCHEMA");
    assert!(!miner.files().feature_file().exists());
}

#[test]
fn all_zero_combo_scores_without_failing() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 1)).unwrap();
    write_itemsets(dir.path(), "100\n0\ta\n0\tb\n0\ta,b\n");
    write_features(dir.path(), "0\n0\n[\"a>b\",[]]\n");

    let output = dir.path().join("out.txt");
    assert_eq!(miner.compute_interestingness(&output).unwrap(), 1);
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("a>b;NaN;0;0;"));

    // Confidence with zero left support is a data-integrity fault instead.
    let rule = AssociationRule::parse("a>b").unwrap();
    assert_eq!(miner.compute_confidence(&[rule]).unwrap_err().error_code(), "DATA_INTEGRITY");
}

#[test]
fn reference_combo_confidence_and_lift() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 1)).unwrap();
    write_itemsets(dir.path(), "100\n50\ta\n20\tb\n10\ta,b\n");
    write_features(dir.path(), "0\n0\n[\"a>b\",[]]\n");

    let output = dir.path().join("out.txt");
    miner.compute_interestingness(&output).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    let columns: Vec<f64> = content
        .trim_end()
        .split(';')
        .skip(1)
        .map(|v| v.parse().unwrap())
        .collect();
    assert!((columns[0] - 0.2).abs() < 1e-12);
    assert!((columns[6] - 1.0).abs() < 1e-12);
}

#[test]
fn header_declares_vector_length() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 1)).unwrap();
    write_features(
        dir.path(),
        "3\n5\n[\"a>b\",[0,0,0,0,0,0,0,1]]\n[\"c,d>e\",[0,0,0,0,0,0,0,0]]\n",
    );
    let (vectors, lengths, schema) = miner.load_feature_vectors().unwrap();
    assert_eq!(schema.dimension(), 8);
    assert!(vectors.iter().all(|v| v.len() == 8));
    assert_eq!(lengths, vec![2, 3]);

    write_features(dir.path(), "3\n5\n[\"a>b\",[0,0,0]]\n");
    assert_eq!(miner.load_feature_vectors().unwrap_err().error_code(), "FEATURE_SCHEMA");
}

#[test]
fn duplicate_rule_across_shards_is_flagged() {
    let dir = TempDir::new().unwrap();
    let miner = RuleMiner::new(config(dir.path(), 2)).unwrap();
    fs::write(miner.files().rule_file(0), "a>b\n").unwrap();
    fs::write(miner.files().rule_file(1), "a>b\n").unwrap();
    let err = miner.load_rules_as_dict().unwrap_err();
    assert_eq!(err.error_code(), "DATA_INTEGRITY");
}

#[test]
fn prefix_filter_partitions_feature_names() {
    let dataset = TransactionDataset::from_rows(vec![
        vec!["age=young", "income=low", "buys=yes"],
        vec!["age=old", "income=high", "buys=no"],
        vec!["age=young", "income=high", "buys=yes"],
    ])
    .unwrap();
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), 2);
    config.filters.insert(
        "buys".to_string(),
        PrefixFilterConfig {
            left_prefixes: vec!["age=".to_string(), "income=".to_string()],
            right_prefixes: vec!["buys=".to_string()],
        },
    );
    config.mining.filter = Some("buys".to_string());
    let miner = RuleMiner::new(config).unwrap().with_dataset(dataset);

    let (left, right) = miner.get_feature_names().unwrap();
    let left: Vec<&str> = left.iter().map(Item::as_str).collect();
    let right: Vec<&str> = right.iter().map(Item::as_str).collect();
    assert_eq!(left, vec!["age=old", "age=young", "income=high", "income=low"]);
    assert_eq!(right, vec!["buys=no", "buys=yes"]);

    let rules = miner
        .run_full_pipeline(&ArmParams {
            min_support: 0.3,
            min_confidence: 0.6,
            itemset_max_size: 3,
        })
        .unwrap();
    assert!(rules > 0);
    let (vectors, _, schema) = miner.load_feature_vectors().unwrap();
    assert_eq!((schema.left_count, schema.right_count), (4, 2));
    assert!(vectors.iter().all(|v| v.len() == 6));

    let itemset = Itemset::parse("age=young,income=low").unwrap();
    let names = [Item::new("buys=yes").unwrap()];
    let values = miner.extract_features_for_itemset(&itemset, &names).unwrap();
    assert_eq!(values.len(), 1);
    assert!(values[0] > 0.0);
}
