//! End-to-end analysis through the umbrella crate: embed nodes, then target them.

use std::sync::Arc;

use serde_json::json;
use wave::{
    analyze_query, embed_nodes, CandidateNode, ClusterLabel, EntityKind, ProviderInfo,
    QueryAnalyzer, StubProvider, EXPLANATION,
};

fn hf_info() -> ProviderInfo {
    ProviderInfo {
        provider: "huggingface".into(),
        model: "sentence-transformers/all-MiniLM-L6-v2".into(),
    }
}

#[test]
fn analyzes_query_with_token_matrix_payload() {
    let payload = json!([[[0.2, 0.4, 0.0], [0.4, 0.0, 0.6]]]);
    let result = analyze_query(
        "Eureka Amor loves Buenos Aires and SEO",
        None,
        &payload,
        &hf_info(),
    )
    .expect("analysis should succeed");

    let names: Vec<_> = result.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Eureka Amor", "Buenos Aires", "SEO"]);
    let kinds: Vec<_> = result.entities.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [EntityKind::Person, EntityKind::Place, EntityKind::Concept]);
    assert_eq!(result.entities[0].confidence, 0.85);
    assert_eq!(result.entities[1].confidence, 0.75);
    assert_eq!(result.entities[2].confidence, 0.7);

    assert_eq!(result.embedding_meta.dims, 3);
    assert_eq!(result.cluster, ClusterLabel::General);
    assert_eq!(result.explanation, EXPLANATION);
    assert_eq!(
        result.next_queries,
        [
            "Eureka Amor loves Buenos Aires and SEO examples",
            "Eureka Amor loves Buenos Aires and SEO best practices",
            "Eureka Amor loves Buenos Aires and SEO checklist",
        ]
    );
}

#[test]
fn embedded_nodes_feed_target_selection() {
    let nodes = vec![
        CandidateNode::new("guide", "SEO guide").with_tag("pillar"),
        CandidateNode::new("pricing", "Pricing").with_tags(["plans", "quote"]),
    ];
    let batch = json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let embedded = embed_nodes(&nodes, &batch, &hf_info()).expect("batch should align");
    assert_eq!(embedded.dims, 3);

    let with_vectors: Vec<CandidateNode> = embedded
        .nodes
        .into_iter()
        .map(|n| n.node.with_vec(n.vec.unwrap_or_default()))
        .collect();

    let result = analyze_query(
        "get a price quote",
        Some(with_vectors.as_slice()),
        &json!([0.1, 0.9, 0.0]),
        &hf_info(),
    )
    .unwrap();

    assert_eq!(result.cluster, ClusterLabel::Conversion);
    let target = result.target.expect("a node should be targeted");
    assert_eq!(target.id, json!("pricing"));
    assert_eq!(target.name, "Pricing");
    assert!(target.tag.is_none());
}

#[test]
fn extra_node_fields_survive_embedding() {
    let nodes: Vec<CandidateNode> = serde_json::from_value(json!([
        {"id": 7, "name": "Maps", "tag": "local", "url": "/maps", "weight": 3}
    ]))
    .unwrap();

    let embedded = embed_nodes(&nodes, &json!([[0.5, 0.5]]), &hf_info()).unwrap();
    let value = serde_json::to_value(&embedded).unwrap();

    assert_eq!(
        value["nodes"][0],
        json!({"id": 7, "name": "Maps", "tag": "local", "url": "/maps", "weight": 3, "vec": [0.5, 0.5]})
    );
    assert_eq!(value["dims"], json!(2));
    assert_eq!(value["provider"], json!("huggingface"));
}

#[tokio::test]
async fn stub_analyzer_runs_full_round_trip() {
    let analyzer = QueryAnalyzer::new(Arc::new(StubProvider::new(64)));
    let nodes = vec![
        CandidateNode::new("q", "quantum encryption").with_tag("pillar"),
        CandidateNode::new("c", "coffee near me").with_tag("local"),
    ];

    let embedded = analyzer.embed_nodes(&nodes).await.unwrap();
    assert_eq!(embedded.dims, 64);
    assert!(embedded.nodes.iter().all(|n| n.vec.as_ref().map(Vec::len) == Some(64)));

    let ranked: Vec<CandidateNode> = embedded
        .nodes
        .into_iter()
        .map(|n| n.node.with_vec(n.vec.unwrap_or_default()))
        .collect();

    let result = analyzer
        .analyze("best quantum encryption course", Some(ranked.as_slice()))
        .await
        .unwrap();

    assert_eq!(result.embedding_meta.provider, "stub");
    assert_eq!(result.embedding_meta.dims, 64);
    assert_eq!(result.cluster, ClusterLabel::Comparison);
    assert!(result.target.is_some());
    let concepts: Vec<_> = result.entities.iter().map(|e| e.name.as_str()).collect();
    assert!(concepts.contains(&"QUANTUM"));
    assert!(concepts.contains(&"ENCRYPTION"));
}
