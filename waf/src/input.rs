/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Every operation that creates, updates or deletes an object takes a `ChangeToken` obtained
//! from `GetChangeToken`. `Limit` values are between 0 and 100. `NextMarker` values are 1 to
//! 1224 characters. None of these limits are checked before a request is sent.

use crate::model::{
    ByteMatchSetUpdate, GeoMatchSetUpdate, IpSetUpdate, LoggingConfiguration, RateKey,
    RegexMatchSetUpdate, RegexPatternSetUpdate, RuleGroupUpdate, RuleUpdate,
    SizeConstraintSetUpdate, SqlInjectionMatchSetUpdate, Tag, TimeWindow, WafAction,
    WebAclUpdate, XssMatchSetUpdate,
};
use smithy_types::structure;

structure! {
    pub struct CreateByteMatchSetInput in mod create_byte_match_set_input {
        /// A friendly name or description of the `ByteMatchSet`. You can't change `Name` after
        /// you create a `ByteMatchSet`.
        name / set_name: string = "Name",
        /// The value returned by the most recent call to `GetChangeToken`.
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateGeoMatchSetInput in mod create_geo_match_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateIpSetInput in mod create_ip_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRateBasedRuleInput in mod create_rate_based_rule_input {
        name / set_name: string = "Name",
        /// A friendly name or description for the metrics for this `RateBasedRule`. Can
        /// only contain alphanumeric characters (A-Z, a-z, 0-9), with maximum length 128 and
        /// minimum length one.
        metric_name / set_metric_name: string = "MetricName",
        /// The field that AWS WAF uses to determine if requests are likely arriving from a
        /// single source and thus subject to rate monitoring.
        rate_key / set_rate_key: shape(RateKey) = "RateKey",
        /// Range: 100 to 2000000000.
        rate_limit / set_rate_limit: value(i64) = "RateLimit",
        change_token / set_change_token: string = "ChangeToken",
        /// At least 1.
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct CreateRegexMatchSetInput in mod create_regex_match_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRegexPatternSetInput in mod create_regex_pattern_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRuleInput in mod create_rule_input {
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
        change_token / set_change_token: string = "ChangeToken",
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct CreateRuleGroupInput in mod create_rule_group_input {
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
        change_token / set_change_token: string = "ChangeToken",
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct CreateSizeConstraintSetInput in mod create_size_constraint_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    /// A request to create a `SqlInjectionMatchSet`.
    pub struct CreateSqlInjectionMatchSetInput in mod create_sql_injection_match_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateWebAclInput in mod create_web_acl_input {
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
        /// The action that you want AWS WAF to take when a request doesn't match the
        /// criteria specified in any of the `Rule` objects that are associated with the `WebACL`.
        default_action / set_default_action: shape(WafAction) = "DefaultAction",
        change_token / set_change_token: string = "ChangeToken",
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct CreateWebAclMigrationStackInput in mod create_web_acl_migration_stack_input {
        /// The UUID of the WAF Classic web ACL that you want to migrate to WAF v2.
        web_acl_id / set_web_acl_id: string = "WebACLId",
        /// The name of the Amazon S3 bucket to store the CloudFormation template in. The name
        /// must start with `aws-waf-migration-`.
        ///
        /// Length: 3 to 63. Pattern: `^aws-waf-migration-[0-9A-Za-z\.\-_]*`
        s3_bucket_name / set_s3_bucket_name: string = "S3BucketName",
        /// Indicates whether to exclude entities that can't be migrated or to stop the
        /// migration. Set this to true to ignore unsupported entities in the web ACL.
        ignore_unsupported_type / set_ignore_unsupported_type: value(bool) = "IgnoreUnsupportedType",
    }
}

structure! {
    /// A request to create an `XssMatchSet`.
    pub struct CreateXssMatchSetInput in mod create_xss_match_set_input {
        name / set_name: string = "Name",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteByteMatchSetInput in mod delete_byte_match_set_input {
        /// The `ByteMatchSetId` of the `ByteMatchSet` that you want to delete.
        byte_match_set_id / set_byte_match_set_id: string = "ByteMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteGeoMatchSetInput in mod delete_geo_match_set_input {
        geo_match_set_id / set_geo_match_set_id: string = "GeoMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteIpSetInput in mod delete_ip_set_input {
        ip_set_id / set_ip_set_id: string = "IPSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteLoggingConfigurationInput in mod delete_logging_configuration_input {
        /// The Amazon Resource Name (ARN) of the web ACL from which you want to delete the
        /// `LoggingConfiguration`.
        resource_arn / set_resource_arn: string = "ResourceArn",
    }
}

structure! {
    pub struct DeletePermissionPolicyInput in mod delete_permission_policy_input {
        /// The Amazon Resource Name (ARN) of the `RuleGroup` from which you want to delete
        /// the policy. The user making the request must be the owner of the `RuleGroup`.
        resource_arn / set_resource_arn: string = "ResourceArn",
    }
}

structure! {
    pub struct DeleteRateBasedRuleInput in mod delete_rate_based_rule_input {
        rule_id / set_rule_id: string = "RuleId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRegexMatchSetInput in mod delete_regex_match_set_input {
        regex_match_set_id / set_regex_match_set_id: string = "RegexMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRegexPatternSetInput in mod delete_regex_pattern_set_input {
        regex_pattern_set_id / set_regex_pattern_set_id: string = "RegexPatternSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRuleInput in mod delete_rule_input {
        rule_id / set_rule_id: string = "RuleId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRuleGroupInput in mod delete_rule_group_input {
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteSizeConstraintSetInput in mod delete_size_constraint_set_input {
        size_constraint_set_id / set_size_constraint_set_id: string = "SizeConstraintSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    /// A request to delete a `SqlInjectionMatchSet` from AWS WAF.
    pub struct DeleteSqlInjectionMatchSetInput in mod delete_sql_injection_match_set_input {
        sql_injection_match_set_id / set_sql_injection_match_set_id: string = "SqlInjectionMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteWebAclInput in mod delete_web_acl_input {
        web_acl_id / set_web_acl_id: string = "WebACLId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    /// A request to delete an `XssMatchSet` from AWS WAF.
    pub struct DeleteXssMatchSetInput in mod delete_xss_match_set_input {
        xss_match_set_id / set_xss_match_set_id: string = "XssMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct GetByteMatchSetInput in mod get_byte_match_set_input {
        byte_match_set_id / set_byte_match_set_id: string = "ByteMatchSetId",
    }
}

structure! {
    pub struct GetChangeTokenInput in mod get_change_token_input {}
}

structure! {
    pub struct GetChangeTokenStatusInput in mod get_change_token_status_input {
        /// The change token for which you want to get the status.
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct GetGeoMatchSetInput in mod get_geo_match_set_input {
        geo_match_set_id / set_geo_match_set_id: string = "GeoMatchSetId",
    }
}

structure! {
    pub struct GetIpSetInput in mod get_ip_set_input {
        ip_set_id / set_ip_set_id: string = "IPSetId",
    }
}

structure! {
    pub struct GetLoggingConfigurationInput in mod get_logging_configuration_input {
        resource_arn / set_resource_arn: string = "ResourceArn",
    }
}

structure! {
    pub struct GetPermissionPolicyInput in mod get_permission_policy_input {
        /// The Amazon Resource Name (ARN) of the `RuleGroup` for which you want to get the policy.
        resource_arn / set_resource_arn: string = "ResourceArn",
    }
}

structure! {
    pub struct GetRateBasedRuleInput in mod get_rate_based_rule_input {
        rule_id / set_rule_id: string = "RuleId",
    }
}

structure! {
    pub struct GetRateBasedRuleManagedKeysInput in mod get_rate_based_rule_managed_keys_input {
        /// The `RuleId` of the `RateBasedRule` for which you want to get a list of `ManagedKeys`.
        rule_id / set_rule_id: string = "RuleId",
        /// A null value for `NextMarker` returns the first batch of `ManagedKeys`.
        next_marker / set_next_marker: string = "NextMarker",
    }
}

structure! {
    pub struct GetRegexMatchSetInput in mod get_regex_match_set_input {
        regex_match_set_id / set_regex_match_set_id: string = "RegexMatchSetId",
    }
}

structure! {
    pub struct GetRegexPatternSetInput in mod get_regex_pattern_set_input {
        regex_pattern_set_id / set_regex_pattern_set_id: string = "RegexPatternSetId",
    }
}

structure! {
    pub struct GetRuleInput in mod get_rule_input {
        rule_id / set_rule_id: string = "RuleId",
    }
}

structure! {
    pub struct GetRuleGroupInput in mod get_rule_group_input {
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
    }
}

structure! {
    pub struct GetSampledRequestsInput in mod get_sampled_requests_input {
        /// The `WebACLId` of the `WebACL` for which you want `GetSampledRequests` to return a
        /// sample of requests.
        web_acl_id / set_web_acl_id: string = "WebAclId",
        /// `RuleId` is one of three values: the `RuleId` of the `Rule` or the `RuleGroupId`
        /// of the `RuleGroup`, or `Default_Action`.
        rule_id / set_rule_id: string = "RuleId",
        /// The start date and time and the end date and time of the range for which you want
        /// `GetSampledRequests` to return a sample of requests. Must be within the previous
        /// three hours.
        time_window / set_time_window: shape(TimeWindow) = "TimeWindow",
        /// The number of requests that you want AWS WAF to return. Range: 1 to 500.
        max_items / set_max_items: value(i64) = "MaxItems",
    }
}

structure! {
    pub struct GetSizeConstraintSetInput in mod get_size_constraint_set_input {
        size_constraint_set_id / set_size_constraint_set_id: string = "SizeConstraintSetId",
    }
}

structure! {
    pub struct GetSqlInjectionMatchSetInput in mod get_sql_injection_match_set_input {
        sql_injection_match_set_id / set_sql_injection_match_set_id: string = "SqlInjectionMatchSetId",
    }
}

structure! {
    pub struct GetWebAclInput in mod get_web_acl_input {
        web_acl_id / set_web_acl_id: string = "WebACLId",
    }
}

structure! {
    pub struct GetXssMatchSetInput in mod get_xss_match_set_input {
        xss_match_set_id / set_xss_match_set_id: string = "XssMatchSetId",
    }
}

structure! {
    pub struct ListActivatedRulesInRuleGroupInput in mod list_activated_rules_in_rule_group_input {
        /// The `RuleGroupId` of the `RuleGroup` for which you want to get a list of `ActivatedRule` objects.
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListByteMatchSetsInput in mod list_byte_match_sets_input {
        /// If you specify a value for `Limit` and you have more `ByteMatchSets` than the
        /// value of `Limit`, AWS WAF returns a `NextMarker` value in the response that allows
        /// you to list another group of `ByteMatchSets`.
        next_marker / set_next_marker: string = "NextMarker",
        /// Specifies the number of `ByteMatchSet` objects that you want AWS WAF to return for
        /// this request.
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListGeoMatchSetsInput in mod list_geo_match_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListIpSetsInput in mod list_ip_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListLoggingConfigurationsInput in mod list_logging_configurations_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListRateBasedRulesInput in mod list_rate_based_rules_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListRegexMatchSetsInput in mod list_regex_match_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListRegexPatternSetsInput in mod list_regex_pattern_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListRuleGroupsInput in mod list_rule_groups_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListRulesInput in mod list_rules_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListSizeConstraintSetsInput in mod list_size_constraint_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    /// A request to list the `SqlInjectionMatchSet` objects created by the current AWS account.
    pub struct ListSqlInjectionMatchSetsInput in mod list_sql_injection_match_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListSubscribedRuleGroupsInput in mod list_subscribed_rule_groups_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct ListTagsForResourceInput in mod list_tags_for_resource_input {
        next_marker / set_next_marker: string = "NextMarker",
        /// Range: 1 to 100.
        limit / set_limit: value(i32) = "Limit",
        /// Length: 1 to 1224. Pattern: `.*\S.*`
        resource_arn / set_resource_arn: string = "ResourceARN",
    }
}

structure! {
    pub struct ListWebAclsInput in mod list_web_acls_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    /// A request to list the `XssMatchSet` objects created by the current AWS account.
    pub struct ListXssMatchSetsInput in mod list_xss_match_sets_input {
        next_marker / set_next_marker: string = "NextMarker",
        limit / set_limit: value(i32) = "Limit",
    }
}

structure! {
    pub struct PutLoggingConfigurationInput in mod put_logging_configuration_input {
        /// The Amazon Kinesis Data Firehose that contains the inspected traffic information,
        /// the redacted fields details, and the Amazon Resource Name (ARN) of the web ACL to
        /// monitor.
        logging_configuration / set_logging_configuration: shape(LoggingConfiguration) = "LoggingConfiguration",
    }
}

structure! {
    pub struct PutPermissionPolicyInput in mod put_permission_policy_input {
        /// The Amazon Resource Name (ARN) of the `RuleGroup` to which you want to attach the policy.
        resource_arn / set_resource_arn: string = "ResourceArn",
        /// The policy to attach to the specified RuleGroup.
        ///
        /// Length: 1 to 395000. Pattern: `.*\S.*`
        policy / set_policy: string = "Policy",
    }
}

structure! {
    pub struct TagResourceInput in mod tag_resource_input {
        resource_arn / set_resource_arn: string = "ResourceARN",
        /// At least 1.
        tags / set_tags: list(Tag) = "Tags",
    }
}

structure! {
    pub struct UntagResourceInput in mod untag_resource_input {
        resource_arn / set_resource_arn: string = "ResourceARN",
        /// At least 1.
        tag_keys / set_tag_keys: list(String) = "TagKeys",
    }
}

structure! {
    pub struct UpdateByteMatchSetInput in mod update_byte_match_set_input {
        /// The `ByteMatchSetId` of the `ByteMatchSet` that you want to update.
        byte_match_set_id / set_byte_match_set_id: string = "ByteMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
        /// An array of `ByteMatchSetUpdate` objects that you want to insert into or delete
        /// from a `ByteMatchSet`. At least 1.
        updates / set_updates: list(ByteMatchSetUpdate) = "Updates",
    }
}

structure! {
    pub struct UpdateGeoMatchSetInput in mod update_geo_match_set_input {
        geo_match_set_id / set_geo_match_set_id: string = "GeoMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
        updates / set_updates: list(GeoMatchSetUpdate) = "Updates",
    }
}

structure! {
    pub struct UpdateIpSetInput in mod update_ip_set_input {
        ip_set_id / set_ip_set_id: string = "IPSetId",
        change_token / set_change_token: string = "ChangeToken",
        /// At most 1000 updates per request.
        updates / set_updates: list(IpSetUpdate) = "Updates",
    }
}

structure! {
    pub struct UpdateRateBasedRuleInput in mod update_rate_based_rule_input {
        rule_id / set_rule_id: string = "RuleId",
        change_token / set_change_token: string = "ChangeToken",
        updates / set_updates: list(RuleUpdate) = "Updates",
        /// Range: 100 to 2000000000.
        rate_limit / set_rate_limit: value(i64) = "RateLimit",
    }
}

structure! {
    pub struct UpdateRegexMatchSetInput in mod update_regex_match_set_input {
        regex_match_set_id / set_regex_match_set_id: string = "RegexMatchSetId",
        updates / set_updates: list(RegexMatchSetUpdate) = "Updates",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRegexPatternSetInput in mod update_regex_pattern_set_input {
        regex_pattern_set_id / set_regex_pattern_set_id: string = "RegexPatternSetId",
        updates / set_updates: list(RegexPatternSetUpdate) = "Updates",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRuleInput in mod update_rule_input {
        rule_id / set_rule_id: string = "RuleId",
        change_token / set_change_token: string = "ChangeToken",
        updates / set_updates: list(RuleUpdate) = "Updates",
    }
}

structure! {
    pub struct UpdateRuleGroupInput in mod update_rule_group_input {
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
        /// You can only insert `REGULAR` rules into a rule group.
        updates / set_updates: list(RuleGroupUpdate) = "Updates",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateSizeConstraintSetInput in mod update_size_constraint_set_input {
        size_constraint_set_id / set_size_constraint_set_id: string = "SizeConstraintSetId",
        change_token / set_change_token: string = "ChangeToken",
        updates / set_updates: list(SizeConstraintSetUpdate) = "Updates",
    }
}

structure! {
    /// A request to update a `SqlInjectionMatchSet`.
    pub struct UpdateSqlInjectionMatchSetInput in mod update_sql_injection_match_set_input {
        sql_injection_match_set_id / set_sql_injection_match_set_id: string = "SqlInjectionMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
        updates / set_updates: list(SqlInjectionMatchSetUpdate) = "Updates",
    }
}

structure! {
    pub struct UpdateWebAclInput in mod update_web_acl_input {
        web_acl_id / set_web_acl_id: string = "WebACLId",
        change_token / set_change_token: string = "ChangeToken",
        /// An array of updates to make to the `WebACL`. Each `ActivatedRule` is inserted or deleted.
        updates / set_updates: list(WebAclUpdate) = "Updates",
        /// A default action for the web ACL, either `ALLOW` or `BLOCK`.
        default_action / set_default_action: shape(WafAction) = "DefaultAction",
    }
}

structure! {
    /// A request to update an `XssMatchSet`.
    pub struct UpdateXssMatchSetInput in mod update_xss_match_set_input {
        xss_match_set_id / set_xss_match_set_id: string = "XssMatchSetId",
        change_token / set_change_token: string = "ChangeToken",
        updates / set_updates: list(XssMatchSetUpdate) = "Updates",
    }
}
