use crate::types::{ClusterLabel, Intent, IntentDistribution};

/// An intent must strictly exceed this share to claim a cluster.
pub const CLUSTER_THRESHOLD: f64 = 0.35;

/// Priority chain, first intent over the threshold wins.
const PRIORITY: [(Intent, ClusterLabel); 4] = [
    (Intent::Local, ClusterLabel::LocalSeo),
    (Intent::Transactional, ClusterLabel::Conversion),
    (Intent::Commercial, ClusterLabel::Comparison),
    (Intent::Informational, ClusterLabel::Education),
];

/// Maps a normalized intent distribution to a content cluster.
pub fn assign_cluster(intents: &IntentDistribution) -> ClusterLabel {
    PRIORITY
        .iter()
        .find(|(intent, _)| intents.get(*intent) > CLUSTER_THRESHOLD)
        .map_or(ClusterLabel::General, |&(_, label)| label)
}
