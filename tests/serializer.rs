use anscalc::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    parse, serialize,
};

#[test]
fn number_node() {
    assert_eq!(Expr::number("1.50").to_string(),
               "{\n  \"type\": \"number\",\n  \"value\": \"1.50\"\n}");
}

#[test]
fn ans_node() {
    assert_eq!(Expr::Ans.to_string(), "{\n  \"type\": \"ans\"\n}");
}

#[test]
fn nested_tree_is_indented_two_spaces_per_level() {
    let expected = r#"{
  "root": {
    "type": "b+",
    "left": {
      "type": "number",
      "value": "1"
    },
    "right": {
      "type": "b*",
      "left": {
        "type": "u-",
        "operand": {
          "type": "ans"
        }
      },
      "right": {
        "type": "number",
        "value": "2."
      }
    }
  }
}"#;
    assert_eq!(serialize(&parse("1 + -ans * 2.").unwrap()), expected);
}

#[test]
fn juxtaposition_serializes_as_multiplication() {
    let json = parse("2(3)").unwrap().root().to_string();
    assert!(json.starts_with("{\n  \"type\": \"b*\","), "{json}");
}

#[test]
fn empty_slots_serialize_as_null() {
    let partial = Expr::BinaryOp { op:    BinaryOperator::Div,
                                   left:  Some(Box::new(Expr::number("1"))),
                                   right: None, };
    assert_eq!(partial.to_string(),
               "{\n  \"type\": \"b/\",\n  \"left\": {\n    \"type\": \"number\",\n    \"value\": \"1\"\n  },\n  \"right\": null\n}");

    let unary = Expr::UnaryOp { op:      UnaryOperator::Plus,
                                operand: None, };
    assert_eq!(unary.to_string(), "{\n  \"type\": \"u+\",\n  \"operand\": null\n}");
}

#[test]
fn literal_values_round_trip() {
    let ast = parse("1.5e3 * (.25 - 7.)").unwrap();
    let json: serde_json::Value = serde_json::from_str(&serialize(&ast)).unwrap();

    let mut literals = Vec::new();
    collect_literals(&json["root"], &mut literals);
    assert_eq!(literals, ["1.5e3", ".25", "7."]);

    for literal in literals {
        let reparsed = parse(&literal).unwrap();
        assert_eq!(reparsed.evaluate(0.0).unwrap(), literal.parse::<f64>().unwrap());
    }
}

fn collect_literals(node: &serde_json::Value, out: &mut Vec<String>) {
    if node["type"] == "number" {
        out.push(node["value"].as_str().unwrap().to_string());
        return;
    }
    for key in ["left", "right", "operand"] {
        if let Some(child) = node.get(key) {
            collect_literals(child, out);
        }
    }
}
