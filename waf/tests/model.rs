/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::collections::HashSet;
use waf::input::{CreateRuleInput, UntagResourceInput, UpdateWebAclInput};
use waf::model::*;

fn block_rule(priority: i32) -> ActivatedRule {
    ActivatedRule::builder()
        .priority(priority)
        .rule_id("WAFRule-1-Example")
        .action(WafAction::builder().r#type(WafActionType::Block).build())
        .r#type(WafRuleType::Regular)
        .build()
}

#[test]
fn activated_rules_dedupe_in_sets() {
    let rules: HashSet<ActivatedRule> = vec![block_rule(1), block_rule(1), block_rule(2)]
        .into_iter()
        .collect();
    assert_eq!(rules.len(), 2);
}

#[test]
fn activated_rule_display() {
    assert_eq!(
        block_rule(1).to_string(),
        "{Priority: 1,RuleId: WAFRule-1-Example,Action: {Type: BLOCK},Type: REGULAR}"
    );
    assert_eq!(ActivatedRule::builder().build().to_string(), "{}");
}

#[test]
fn every_enum_value_is_recognized() {
    fn check<T>(
        values: &[&str],
        parse: fn(&str) -> Result<T, smithy_types::UnknownVariantError>,
        as_str: fn(&T) -> &str,
    ) {
        for value in values {
            let parsed = parse(value).expect("known value");
            assert_eq!(as_str(&parsed), *value);
        }
        assert!(parse("").is_err());
        assert!(parse("not-a-value").is_err());
    }
    check(ChangeAction::values(), ChangeAction::from_value, ChangeAction::as_str);
    check(ChangeTokenStatus::values(), ChangeTokenStatus::from_value, ChangeTokenStatus::as_str);
    check(ComparisonOperator::values(), ComparisonOperator::from_value, ComparisonOperator::as_str);
    check(GeoMatchConstraintType::values(), GeoMatchConstraintType::from_value, GeoMatchConstraintType::as_str);
    check(GeoMatchConstraintValue::values(), GeoMatchConstraintValue::from_value, GeoMatchConstraintValue::as_str);
    check(IpSetDescriptorType::values(), IpSetDescriptorType::from_value, IpSetDescriptorType::as_str);
    check(MatchFieldType::values(), MatchFieldType::from_value, MatchFieldType::as_str);
    check(MigrationErrorType::values(), MigrationErrorType::from_value, MigrationErrorType::as_str);
    check(ParameterExceptionField::values(), ParameterExceptionField::from_value, ParameterExceptionField::as_str);
    check(ParameterExceptionReason::values(), ParameterExceptionReason::from_value, ParameterExceptionReason::as_str);
    check(PositionalConstraint::values(), PositionalConstraint::from_value, PositionalConstraint::as_str);
    check(PredicateType::values(), PredicateType::from_value, PredicateType::as_str);
    check(RateKey::values(), RateKey::from_value, RateKey::as_str);
    check(TextTransformation::values(), TextTransformation::from_value, TextTransformation::as_str);
    check(WafActionType::values(), WafActionType::from_value, WafActionType::as_str);
    check(WafOverrideActionType::values(), WafOverrideActionType::from_value, WafOverrideActionType::as_str);
    check(WafRuleType::values(), WafRuleType::from_value, WafRuleType::as_str);
}

#[test]
fn enum_values_are_case_sensitive() {
    assert_eq!(ComparisonOperator::values(), &["EQ", "NE", "LE", "LT", "GE", "GT"]);
    assert!(ComparisonOperator::from_value("eq").is_err());
    assert_eq!(
        TextTransformation::values(),
        &["NONE", "COMPRESS_WHITE_SPACE", "HTML_ENTITY_DECODE", "LOWERCASE", "CMD_LINE", "URL_DECODE"]
    );
    assert_eq!(WafRuleType::from("GROUP"), WafRuleType::Group);
    assert_eq!(WafRuleType::from("group"), WafRuleType::Unknown("group".into()));
}

#[test]
fn size_constraints_hold_large_sizes() {
    let constraint = SizeConstraint::builder()
        .field_to_match(FieldToMatch::builder().r#type(MatchFieldType::Body).build())
        .text_transformation(TextTransformation::None)
        .comparison_operator(ComparisonOperator::Gt)
        .size(21_474_836_480)
        .build();
    assert_eq!(constraint.size(), Some(21_474_836_480));
    assert_eq!(
        constraint.to_string(),
        "{FieldToMatch: {Type: BODY},TextTransformation: NONE,ComparisonOperator: GT,Size: 21474836480}"
    );
}

#[test]
fn geo_match_values_are_country_codes() {
    assert_eq!(GeoMatchConstraintValue::values().len(), 249);
    assert_eq!(GeoMatchConstraintValue::from_value("AX"), Ok(GeoMatchConstraintValue::Ax));
    assert!(GeoMatchConstraintValue::from_value("us").is_err());

    let constraint = GeoMatchConstraint::builder()
        .r#type(GeoMatchConstraintType::Country)
        .value(GeoMatchConstraintValue::Us)
        .build();
    assert_eq!(constraint.value(), Some(&GeoMatchConstraintValue::Us));
    let json = serde_json::to_value(&constraint).unwrap();
    assert_eq!(json, serde_json::json!({"Type": "Country", "Value": "US"}));

    let lenient = GeoMatchConstraint::builder().value("XK").build();
    assert_eq!(lenient.value().map(|v| v.as_str()), Some("XK"));
}

#[test]
fn list_setters_replace_and_clear() {
    let input = CreateRuleInput::builder()
        .name("MyIPSetRule")
        .tags(Tag::builder().key("team").value("edge").build())
        .set_tags(Some(vec![Tag::builder().key("env").value("prod").build()]))
        .build();
    assert_eq!(input.tags().map(|tags| tags.len()), Some(1));
    assert_eq!(input.tags().unwrap()[0].key(), Some("env"));

    let cleared = UntagResourceInput::builder()
        .tag_keys("team")
        .set_tag_keys(None)
        .build();
    assert_eq!(cleared.tag_keys(), None);
    assert_eq!(cleared, UntagResourceInput::builder().build());
}

#[test]
fn update_web_acl_wire_shape() {
    let input = UpdateWebAclInput::builder()
        .web_acl_id("webacl-1")
        .change_token("token")
        .updates(
            WebAclUpdate::builder()
                .action(ChangeAction::Insert)
                .activated_rule(block_rule(1))
                .build(),
        )
        .default_action(WafAction::builder().r#type(WafActionType::Allow).build())
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        serde_json::json!({
            "WebACLId": "webacl-1",
            "ChangeToken": "token",
            "Updates": [{
                "Action": "INSERT",
                "ActivatedRule": {
                    "Priority": 1,
                    "RuleId": "WAFRule-1-Example",
                    "Action": {"Type": "BLOCK"},
                    "Type": "REGULAR"
                }
            }],
            "DefaultAction": {"Type": "ALLOW"}
        })
    );
}
