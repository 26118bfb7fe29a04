//! `RuleMiner`: sequences the stages and exposes every public operation.
//!
//! The orchestrator itself is single-threaded glue; the miner and generator
//! own their parallelism. Every stage reads the artifacts of the previous one
//! from the work directory, and every loader rebuilds its index from files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use ruleminer_core::config::{ArmParams, RuleMinerConfig};
use ruleminer_core::errors::{DictionaryError, PipelineError, RuleMinerResult};
use ruleminer_core::files::{ArmFiles, ShardSet};
use ruleminer_core::types::{AssociationRule, Item, Itemset};
use ruleminer_measures::InterestingnessEvaluator;
use ruleminer_mining::{
    AprioriMiner, FilterRegistry, GenerationSummary, ItemsetDictionary, ItemsetMiner,
    MiningSummary, RuleFilter, RuleGenerator, RulesDictionary, ShardedRuleGenerator,
    TransactionDataset,
};

use crate::features::{self, FeatureFile, FeatureSchema, FeatureVector, FeatureWriter};
use crate::relation::{phi_relation_matrix, RelationMatrix};

const STAGE_ITEMSETS: &str = "generate_frequent_itemsets";
const STAGE_FEATURES: &str = "extract_features_for_all_rules";
const STAGE_INTERESTINGNESS: &str = "compute_interestingness";
const STAGE_LOAD_FEATURES: &str = "load_feature_vectors";

/// The association-rule mining pipeline over one work directory.
pub struct RuleMiner {
    config: RuleMinerConfig,
    files: ArmFiles,
    threads: usize,
    filter: Arc<dyn RuleFilter>,
    dataset: Option<TransactionDataset>,
    relation_matrix: Option<Arc<dyn RelationMatrix>>,
    miner: Box<dyn ItemsetMiner>,
    generator: Box<dyn RuleGenerator>,
    evaluator: InterestingnessEvaluator,
}

impl std::fmt::Debug for RuleMiner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleMiner")
            .field("work_dir", &self.files.work_dir())
            .field("threads", &self.threads)
            .field("filter", &self.filter.name())
            .field("miner", &self.miner.name())
            .field("generator", &self.generator.name())
            .field("has_dataset", &self.dataset.is_some())
            .field("has_relation_matrix", &self.relation_matrix.is_some())
            .finish()
    }
}

impl RuleMiner {
    /// Build from a configuration, resolving the filter bundle against the
    /// built-in and configured bundles.
    pub fn new(config: RuleMinerConfig) -> RuleMinerResult<Self> {
        let registry = FilterRegistry::from_config(&config)?;
        Self::with_registry(config, &registry)
    }

    /// Build with a caller-supplied registry, e.g. holding custom bundles.
    pub fn with_registry(config: RuleMinerConfig, registry: &FilterRegistry) -> RuleMinerResult<Self> {
        RuleMinerConfig::validate(&config)?;
        let filter = registry.resolve(config.mining.effective_filter())?;
        let files = config.files.layout();
        let threads = config.mining.effective_threads();
        info!(
            work_dir = %files.work_dir().display(),
            threads,
            filter = filter.name(),
            "rule miner configured"
        );
        Ok(Self {
            config,
            files,
            threads,
            filter,
            dataset: None,
            relation_matrix: None,
            miner: Box::new(AprioriMiner::new()),
            generator: Box::new(ShardedRuleGenerator::new()),
            evaluator: InterestingnessEvaluator::new(),
        })
    }

    /// Attach the training dataset. Without an explicit relation matrix the
    /// phi matrix of the dataset is used for features.
    pub fn with_dataset(mut self, dataset: TransactionDataset) -> Self {
        if self.relation_matrix.is_none() {
            self.relation_matrix = Some(Arc::new(phi_relation_matrix(&dataset)));
        }
        self.dataset = Some(dataset);
        self
    }

    pub fn with_relation_matrix(mut self, matrix: Arc<dyn RelationMatrix>) -> Self {
        self.relation_matrix = Some(matrix);
        self
    }

    pub fn with_miner(mut self, miner: Box<dyn ItemsetMiner>) -> Self {
        self.miner = miner;
        self
    }

    pub fn with_generator(mut self, generator: Box<dyn RuleGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn config(&self) -> &RuleMinerConfig {
        &self.config
    }

    pub fn files(&self) -> &ArmFiles {
        &self.files
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn filter(&self) -> &dyn RuleFilter {
        self.filter.as_ref()
    }

    /// Mining parameters from the configuration.
    pub fn default_params(&self) -> ArmParams {
        self.config.arm_params()
    }

    /// The fixed rule shard set of this run.
    pub fn shards(&self) -> ShardSet {
        ShardSet::new(&self.files, self.threads)
    }

    // ---- stages ----

    /// Stage 1: mine the itemset file from the attached dataset.
    pub fn generate_frequent_itemsets(&self, params: &ArmParams) -> RuleMinerResult<MiningSummary> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| PipelineError::Precondition {
                stage: STAGE_ITEMSETS,
                message: "no dataset attached".to_string(),
            })?;
        self.files
            .ensure_work_dir()
            .map_err(|e| PipelineError::io(STAGE_ITEMSETS, self.files.work_dir(), e))?;

        let min_support_count = params.min_support * dataset.size() as f64;
        info!(
            miner = self.miner.name(),
            transactions = dataset.size(),
            min_support_count,
            max_itemset_size = params.itemset_max_size,
            "generating frequent itemsets"
        );
        let summary = self.miner.mine(
            dataset,
            min_support_count,
            self.threads,
            params.itemset_max_size,
            &self.files.itemset_file(),
        )?;
        Ok(summary)
    }

    /// Stage 2: generate the rule shards. Requires stage 1's itemset file.
    pub fn generate_association_rules(&self, params: &ArmParams) -> RuleMinerResult<GenerationSummary> {
        let itemsets = self.load_frequent_itemsets_as_dict()?;
        info!(
            generator = self.generator.name(),
            itemsets = itemsets.len(),
            min_confidence = params.min_confidence,
            filter = self.filter.name(),
            "generating association rules"
        );
        let summary = self.generator.generate(
            &itemsets,
            params.min_confidence,
            self.filter.as_ref(),
            self.threads,
            &self.shards(),
        )?;
        Ok(summary)
    }

    /// Itemsets, then rules, then features. No stage is skipped.
    pub fn run_full_pipeline(&self, params: &ArmParams) -> RuleMinerResult<usize> {
        let start = Instant::now();
        self.generate_frequent_itemsets(params)?;
        self.generate_association_rules(params)?;
        let rules = self.extract_features_for_all_rules()?;
        info!(
            rules,
            duration_ms = start.elapsed().as_millis() as u64,
            "pipeline complete"
        );
        Ok(rules)
    }

    // ---- metrics ----

    /// `rule text -> (confidence, both support)` for each rule, from a freshly
    /// loaded itemset dictionary.
    pub fn compute_confidence(
        &self,
        rules: &[AssociationRule],
    ) -> RuleMinerResult<FxHashMap<String, (f64, u64)>> {
        let itemsets = self.load_frequent_itemsets_as_dict()?;
        let mut out = FxHashMap::default();
        for rule in rules {
            let combo = itemsets.frequency_combo(rule)?;
            let confidence = combo.confidence().ok_or_else(|| DictionaryError::ZeroLeftSupport {
                rule: rule.serialize(),
            })?;
            out.insert(rule.serialize(), (confidence, combo.both));
        }
        Ok(out)
    }

    /// Evaluate every measure for every rule of the feature file and write
    /// `rule;v1;...;v32` lines to `output`. Returns the number of rules.
    ///
    /// Every combo is resolved before `output` is touched, so a data-integrity
    /// fault leaves any earlier output in place.
    pub fn compute_interestingness(&self, output: &Path) -> RuleMinerResult<usize> {
        let itemsets = self.load_frequent_itemsets_as_dict()?;
        let rules = self.load_association_rules()?;
        let total = itemsets.transaction_count();
        info!(rules = rules.len(), total, "computing interestingness");

        let combos = rules
            .iter()
            .map(|rule| itemsets.frequency_combo(rule))
            .collect::<Result<Vec<_>, _>>()?;

        let io_err = |e| PipelineError::io(STAGE_INTERESTINGNESS, output, e);
        let mut writer = BufWriter::new(File::create(output).map_err(io_err)?);
        for (rule, combo) in rules.iter().zip(&combos) {
            let values = self.evaluator.evaluate(combo, total);
            writeln!(writer, "{}", self.evaluator.format_line(&rule.serialize(), &values))
                .map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;
        Ok(rules.len())
    }

    // ---- features ----

    fn relation_matrix(&self, stage: &'static str) -> RuleMinerResult<&dyn RelationMatrix> {
        self.relation_matrix
            .as_deref()
            .ok_or_else(|| PipelineError::Precondition {
                stage,
                message: "no relation matrix (attach a dataset or a matrix)".to_string(),
            })
    }

    /// Sorted left and right feature names under the configured filter.
    pub fn get_feature_names(&self) -> RuleMinerResult<(Vec<Item>, Vec<Item>)> {
        let matrix = self.relation_matrix("get_feature_names")?;
        Ok(features::feature_names(matrix, self.filter.as_ref()))
    }

    pub fn extract_features_for_itemset(
        &self,
        itemset: &Itemset,
        names: &[Item],
    ) -> RuleMinerResult<Vec<f64>> {
        let matrix = self.relation_matrix("extract_features_for_itemset")?;
        Ok(features::extract_for_itemset(matrix, itemset, names)?)
    }

    /// Stage 3: write the feature file for every rule of every shard, in
    /// shard order then line order. Returns the number of rules.
    pub fn extract_features_for_all_rules(&self) -> RuleMinerResult<usize> {
        let matrix = self.relation_matrix(STAGE_FEATURES)?;
        let (left_names, right_names) = features::feature_names(matrix, self.filter.as_ref());
        let schema = FeatureSchema::new(left_names.len(), right_names.len());
        let rules = self.load_rules_as_dict()?;
        info!(
            rules = rules.len(),
            left_count = schema.left_count,
            right_count = schema.right_count,
            "extracting rule features"
        );

        let mut vectors = Vec::with_capacity(rules.len());
        for rule in rules.iter() {
            let left = features::extract_for_itemset(matrix, rule.left(), &left_names)?;
            let right = features::extract_for_itemset(matrix, rule.right(), &right_names)?;
            vectors.push(FeatureVector::from_sides(&schema, &rule.serialize(), left, right)?);
        }

        let mut writer = FeatureWriter::create(STAGE_FEATURES, &self.files.feature_file(), schema)?;
        for (rule, vector) in rules.iter().zip(&vectors) {
            writer.write_record(rule, vector)?;
        }
        writer.finish()
    }

    // ---- loaders ----

    pub fn load_frequent_itemsets_as_dict(&self) -> RuleMinerResult<ItemsetDictionary> {
        Ok(ItemsetDictionary::load_from_file(&self.files.itemset_file())?)
    }

    /// Merge all `threads` rule shards.
    pub fn load_rules_as_dict(&self) -> RuleMinerResult<RulesDictionary> {
        Ok(RulesDictionary::load_shards(&self.shards())?)
    }

    fn load_feature_file(&self) -> RuleMinerResult<FeatureFile> {
        let file = FeatureFile::load(STAGE_LOAD_FEATURES, &self.files.feature_file())?;
        debug!(records = file.records.len(), "loaded feature file");
        Ok(file)
    }

    /// The rules of the feature file, in file order.
    pub fn load_association_rules(&self) -> RuleMinerResult<Vec<AssociationRule>> {
        Ok(self
            .load_feature_file()?
            .records
            .into_iter()
            .map(|r| r.rule)
            .collect())
    }

    /// Feature vectors, rule lengths and the schema, in file order.
    pub fn load_feature_vectors(
        &self,
    ) -> RuleMinerResult<(Vec<FeatureVector>, Vec<usize>, FeatureSchema)> {
        let file = self.load_feature_file()?;
        let lengths = file.records.iter().map(|r| r.rule.length()).collect();
        let vectors = file.records.into_iter().map(|r| r.vector).collect();
        Ok((vectors, lengths, file.schema))
    }

    /// `rule text -> feature vector`, plus the schema.
    pub fn load_rules_and_features(
        &self,
    ) -> RuleMinerResult<(FxHashMap<String, FeatureVector>, FeatureSchema)> {
        let file = self.load_feature_file()?;
        let map = file
            .records
            .into_iter()
            .map(|r| (r.rule.serialize(), r.vector))
            .collect();
        Ok((map, file.schema))
    }
}
