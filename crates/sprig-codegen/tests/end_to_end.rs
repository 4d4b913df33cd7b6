#![cfg(all(feature = "web", feature = "native", feature = "miniprogram"))]

use sprig_codegen::generators::{MiniProgramContext, NativeContext};
use sprig_codegen::{
    generate_batch, ArtifactWriter, CodeGenerator, FsWriter, GenerateOptions,
    MiniProgramGenerator, NativeGenerator, Platform, WebGenerator,
};
use sprig_core::{DesignNode, NodeType, NodesResponse};

const NODES: &str = r#"{
  "name": "Demo",
  "nodes": {
    "10:1": {
      "document": {
        "id": "10:1",
        "name": "hero card",
        "type": "FRAME",
        "layoutMode": "HORIZONTAL",
        "itemSpacing": 16,
        "children": [
          {
            "id": "10:2",
            "name": "Title",
            "type": "TEXT",
            "characters": "Hi",
            "style": { "fontSize": 14 },
            "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0, "a": 1 } }]
          }
        ]
      }
    },
    "10:9": null
  }
}"#;

fn hero() -> DesignNode {
    NodesResponse::from_json(NODES)
        .unwrap()
        .node("10:1")
        .unwrap()
        .clone()
}

#[test]
fn web_end_to_end() {
    let artifact = WebGenerator::new().generate(&hero(), "HeroCard").unwrap();
    let expected = "\
import React from 'react';

const HeroCard = () => {
  return (
    <div className=\"flex gap-4\">
      <span className=\"text-sm text-black\">Hi</span>
    </div>
  );
};

export default HeroCard;
";
    assert_eq!(artifact.source(), Some(expected));
}

#[test]
fn native_end_to_end() {
    let artifact = NativeGenerator::new().generate(&hero(), "HeroCard").unwrap();
    let source = artifact.source().unwrap();
    assert!(source.contains("import { View, Text } from 'react-native';"));
    assert!(source.contains("<View style={{ flexDirection: 'row', gap: 16 }}>"));
    assert!(source.contains("<Text style={{ fontSize: 14, color: 'rgb(0, 0, 0)' }}>Hi</Text>"));
}

#[test]
fn miniprogram_end_to_end() {
    let bundle = MiniProgramGenerator::new()
        .generate_bundle(&hero(), "HeroCard")
        .unwrap();
    assert_eq!(
        bundle.wxml,
        "<view class=\"herocard-0\">\n  <text class=\"herocard-1\">Hi</text>\n</view>\n"
    );
    assert!(bundle
        .wxss
        .starts_with(".herocard-0 {\n  display: flex;\n  flex-direction: row;\n"));
    assert!(bundle.wxss.contains(".herocard-1 {\n  font-size: 14rpx;"));
}

#[test]
fn text_ignores_children_everywhere() {
    let node = DesignNode::text("1:1", "Hello")
        .with_child(DesignNode::new("1:2", "Stray", NodeType::Rectangle));

    let web = WebGenerator::new().generate(&node, "Label").unwrap();
    assert!(web.source().unwrap().contains("return <span>Hello</span>;"));

    let mut ctx = NativeContext::new();
    let native = NativeGenerator::new().lower(&node, &mut ctx);
    assert_eq!(native.content.text(), Some("Hello"));
    assert_eq!(ctx.components().count(), 1);

    let mut ctx = MiniProgramContext::new("Label");
    let markup = MiniProgramGenerator::new().lower(&node, &mut ctx);
    assert_eq!(markup.render(), "<text class=\"label-0\">Hello</text>\n");
    assert_eq!(ctx.assigned(), 1);
}

#[test]
fn children_keep_order_everywhere() {
    let node = DesignNode::new("1:1", "Stack", NodeType::Frame)
        .with_child(DesignNode::text("a", "A"))
        .with_child(DesignNode::text("b", "B"))
        .with_child(DesignNode::text("c", "C"));

    let web = WebGenerator::new().generate(&node, "Stack").unwrap();
    let source = web.source().unwrap();
    let positions: Vec<_> = ["<span>A</span>", "<span>B</span>", "<span>C</span>"]
        .iter()
        .map(|s| source.find(s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let native = NativeGenerator::new().lower(&node, &mut NativeContext::new());
    let texts: Vec<_> = native
        .content
        .children()
        .iter()
        .filter_map(|c| c.content.text())
        .collect();
    assert_eq!(texts, vec!["A", "B", "C"]);

    let markup = MiniProgramGenerator::new().lower(&node, &mut MiniProgramContext::new("Stack"));
    let texts: Vec<_> = markup
        .content
        .children()
        .iter()
        .filter_map(|c| c.content.text())
        .collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
}

#[test]
fn selector_indices_increase_in_preorder() {
    let node = DesignNode::new("1", "Root", NodeType::Frame)
        .with_child(
            DesignNode::new("2", "Left", NodeType::Group)
                .with_child(DesignNode::new("3", "Leaf", NodeType::Rectangle))
                .with_child(DesignNode::new("4", "Leaf", NodeType::Rectangle)),
        )
        .with_child(
            DesignNode::new("5", "Right", NodeType::Group)
                .with_child(DesignNode::new("6", "Leaf", NodeType::Ellipse)),
        );

    let mut ctx = MiniProgramContext::new("Root");
    let markup = MiniProgramGenerator::new().lower(&node, &mut ctx);
    let expected: Vec<String> = (0..6).map(|i| format!("root-{}", i)).collect();
    assert_eq!(markup.classes(), expected);
}

#[test]
fn hidden_marker_for_every_node_type() {
    let types = [
        NodeType::Frame,
        NodeType::Group,
        NodeType::Component,
        NodeType::ComponentSet,
        NodeType::Instance,
        NodeType::Section,
        NodeType::Rectangle,
        NodeType::Ellipse,
        NodeType::Vector,
        NodeType::BooleanOperation,
        NodeType::Text,
        NodeType::Line,
        NodeType::RegularPolygon,
        NodeType::Star,
        NodeType::Unknown,
    ];

    for node_type in types {
        let node = DesignNode::new("1:1", "Hidden", node_type).hidden();

        let web = WebGenerator::new().lower(&node);
        assert!(web.attribute("hidden").is_some(), "web {:?}", node_type);

        let native = NativeGenerator::new().lower(&node, &mut NativeContext::new());
        assert!(native.style.contains_key("display"), "native {:?}", node_type);

        let markup = MiniProgramGenerator::new().lower(&node, &mut MiniProgramContext::new("H"));
        assert!(markup.hidden, "miniprogram {:?}", node_type);
    }
}

#[test]
fn batch_writes_and_isolates() {
    let response = NodesResponse::from_json(NODES).unwrap();
    let ids = vec!["10:1".to_string(), "10:9".to_string()];
    let dir = tempfile::TempDir::new().unwrap();
    let writer = FsWriter::new(dir.path());

    let options = GenerateOptions::new(Platform::MiniProgram);
    let writer: &dyn ArtifactWriter = &writer;
    let results = generate_batch(&response, &ids, &options, Some(writer)).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "HeroCard");
    let code: serde_json::Value = serde_json::from_str(&results[0].code).unwrap();
    assert!(code["wxml"].as_str().unwrap().contains("herocard-0"));

    let component_dir = dir.path().join("wechat/components/herocard");
    for file in ["index.wxml", "index.wxss", "index.js", "index.json"] {
        assert!(component_dir.join(file).exists(), "missing {}", file);
    }
}
