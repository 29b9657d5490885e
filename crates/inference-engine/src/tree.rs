//! Decision Tree Classifier
//!
//! Binary CART tree over the two sensor features, grown by minimising the
//! weighted Gini impurity of each split.

use crate::classifier::{check_finite, Classifier};
use crate::features::{FeatureVector, FEATURE_DIMENSION};
use crate::InferenceError;
use sensor_data::{Label, LabeledReading};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Minimum impurity decrease for a split to be kept
const MIN_IMPURITY_DECREASE: f64 = 1e-12;

/// Tree growth limits
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Maximum depth of the tree (root is depth 0)
    pub max_depth: usize,
    /// Nodes with fewer samples become leaves
    pub min_samples_split: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            min_samples_split: 2,
        }
    }
}

/// Tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Terminal node
    Leaf {
        label: Label,
        /// Training samples that reached this leaf
        samples: usize,
    },
    /// Internal node: `x[feature] <= threshold` goes left
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn max_feature_index(&self) -> Option<usize> {
        match self {
            Node::Leaf { .. } => None,
            Node::Split {
                feature,
                left,
                right,
                ..
            } => [Some(*feature), left.max_feature_index(), right.max_feature_index()]
                .into_iter()
                .flatten()
                .max(),
        }
    }
}

/// Trained decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}

/// Training sample: features in column order plus label
struct Sample {
    x: [f64; FEATURE_DIMENSION],
    label: Label,
}

/// Best split found for a node
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl DecisionTreeClassifier {
    /// Wrap an existing tree
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Fit a tree to labeled readings
    pub fn fit(readings: &[LabeledReading], config: &TrainConfig) -> Result<Self, InferenceError> {
        if readings.is_empty() {
            return Err(InferenceError::EmptyTrainingSet);
        }

        let samples: Vec<Sample> = readings
            .iter()
            .map(|r| Sample {
                x: FeatureVector::from(&r.reading).as_array(),
                label: r.label,
            })
            .collect();

        if let Some(bad) = samples.iter().find(|s| s.x.iter().any(|v| !v.is_finite())) {
            return Err(InferenceError::InvalidInput(format!(
                "non-finite training sample {:?}",
                bad.x
            )));
        }

        let indices: Vec<usize> = (0..samples.len()).collect();
        let root = grow(&samples, indices, 0, config);
        let tree = Self { root };

        info!(
            "Trained decision tree on {} samples: depth={}, leaves={}",
            samples.len(),
            tree.depth(),
            tree.leaf_count()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Length of the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Check the tree only refers to known feature columns
    pub fn validate(&self) -> Result<(), InferenceError> {
        match self.root.max_feature_index() {
            Some(idx) if idx >= FEATURE_DIMENSION => Err(InferenceError::InvalidInputShape {
                expected: format!("feature index < {}", FEATURE_DIMENSION),
                actual: format!("feature index {}", idx),
            }),
            _ => Ok(()),
        }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label, InferenceError> {
        check_finite(features)?;
        let x = features.as_array();

        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label, .. } => return Ok(*label),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = x.get(*feature).ok_or_else(|| {
                        InferenceError::InvalidInputShape {
                            expected: format!("feature index < {}", FEATURE_DIMENSION),
                            actual: format!("feature index {}", feature),
                        }
                    })?;
                    node = if *value <= *threshold { left } else { right };
                }
            }
        }
    }
}

fn grow(samples: &[Sample], indices: Vec<usize>, depth: usize, config: &TrainConfig) -> Node {
    let n = indices.len();
    let positives = count_positives(samples, &indices);
    let leaf = Node::Leaf {
        label: majority(positives, n),
        samples: n,
    };

    if positives == 0 || positives == n || n < config.min_samples_split || depth >= config.max_depth
    {
        return leaf;
    }

    let parent = gini(positives, n);
    let split = match best_split(samples, &indices) {
        Some(split) if split.impurity < parent - MIN_IMPURITY_DECREASE => split,
        _ => return leaf,
    };

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| samples[i].x[split.feature] <= split.threshold);
    if left.is_empty() || right.is_empty() {
        return leaf;
    }

    debug!(
        "depth {}: split feature {} at {:.4} ({} | {})",
        depth,
        split.feature,
        split.threshold,
        left.len(),
        right.len()
    );

    Node::Split {
        feature: split.feature,
        threshold: split.threshold,
        left: Box::new(grow(samples, left, depth + 1, config)),
        right: Box::new(grow(samples, right, depth + 1, config)),
    }
}

/// Scan every feature for the threshold with the lowest weighted Gini
fn best_split(samples: &[Sample], indices: &[usize]) -> Option<SplitCandidate> {
    let n = indices.len();
    let total_positives = count_positives(samples, indices);
    let mut best: Option<SplitCandidate> = None;

    for feature in 0..FEATURE_DIMENSION {
        let mut sorted = indices.to_vec();
        sorted.sort_by(|&a, &b| samples[a].x[feature].total_cmp(&samples[b].x[feature]));

        let mut left_positives = 0;
        for k in 0..n - 1 {
            if samples[sorted[k]].label.needs_maintenance() {
                left_positives += 1;
            }

            let here = samples[sorted[k]].x[feature];
            let next = samples[sorted[k + 1]].x[feature];
            if here == next {
                continue;
            }

            let left_n = k + 1;
            let right_n = n - left_n;
            let impurity = (left_n as f64 * gini(left_positives, left_n)
                + right_n as f64 * gini(total_positives - left_positives, right_n))
                / n as f64;

            if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                best = Some(SplitCandidate {
                    feature,
                    threshold: here + (next - here) / 2.0,
                    impurity,
                });
            }
        }
    }

    best
}

fn count_positives(samples: &[Sample], indices: &[usize]) -> usize {
    indices
        .iter()
        .filter(|&&i| samples[i].label.needs_maintenance())
        .count()
}

fn gini(positives: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let p = positives as f64 / n as f64;
    1.0 - p * p - (1.0 - p) * (1.0 - p)
}

/// Majority label; ties go to maintenance
fn majority(positives: usize, n: usize) -> Label {
    Label::from(positives * 2 >= n && n > 0)
}
