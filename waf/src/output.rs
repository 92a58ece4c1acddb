/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    ActivatedRule, ByteMatchSet, ByteMatchSetSummary, ChangeTokenStatus, GeoMatchSet,
    GeoMatchSetSummary, IpSet, IpSetSummary, LoggingConfiguration, RateBasedRule, RegexMatchSet,
    RegexMatchSetSummary, RegexPatternSet, RegexPatternSetSummary, Rule, RuleGroup,
    RuleGroupSummary, RuleSummary, SampledHttpRequest, SizeConstraintSet,
    SizeConstraintSetSummary, SqlInjectionMatchSet, SqlInjectionMatchSetSummary,
    SubscribedRuleGroupSummary, TagInfoForResource, TimeWindow, WebAcl, WebAclSummary,
    XssMatchSet, XssMatchSetSummary,
};
use smithy_types::structure;

structure! {
    pub struct CreateByteMatchSetOutput in mod create_byte_match_set_output {
        /// A `ByteMatchSet` that contains no `ByteMatchTuple` objects.
        byte_match_set / set_byte_match_set: shape(ByteMatchSet) = "ByteMatchSet",
        /// The `ChangeToken` that you used to submit the request. You can also use this value
        /// to query the status of the request with `GetChangeTokenStatus`.
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateGeoMatchSetOutput in mod create_geo_match_set_output {
        geo_match_set / set_geo_match_set: shape(GeoMatchSet) = "GeoMatchSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateIpSetOutput in mod create_ip_set_output {
        ip_set / set_ip_set: shape(IpSet) = "IPSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRateBasedRuleOutput in mod create_rate_based_rule_output {
        rule / set_rule: shape(RateBasedRule) = "Rule",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRegexMatchSetOutput in mod create_regex_match_set_output {
        regex_match_set / set_regex_match_set: shape(RegexMatchSet) = "RegexMatchSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRegexPatternSetOutput in mod create_regex_pattern_set_output {
        regex_pattern_set / set_regex_pattern_set: shape(RegexPatternSet) = "RegexPatternSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRuleOutput in mod create_rule_output {
        rule / set_rule: shape(Rule) = "Rule",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateRuleGroupOutput in mod create_rule_group_output {
        rule_group / set_rule_group: shape(RuleGroup) = "RuleGroup",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateSizeConstraintSetOutput in mod create_size_constraint_set_output {
        size_constraint_set / set_size_constraint_set: shape(SizeConstraintSet) = "SizeConstraintSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    /// The response to a `CreateSqlInjectionMatchSet` request.
    pub struct CreateSqlInjectionMatchSetOutput in mod create_sql_injection_match_set_output {
        sql_injection_match_set / set_sql_injection_match_set: shape(SqlInjectionMatchSet) = "SqlInjectionMatchSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateWebAclOutput in mod create_web_acl_output {
        web_acl / set_web_acl: shape(WebAcl) = "WebACL",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct CreateWebAclMigrationStackOutput in mod create_web_acl_migration_stack_output {
        /// The URL of the template created in Amazon S3.
        s3_object_url / set_s3_object_url: string = "S3ObjectUrl",
    }
}

structure! {
    /// The response to a `CreateXssMatchSet` request.
    pub struct CreateXssMatchSetOutput in mod create_xss_match_set_output {
        xss_match_set / set_xss_match_set: shape(XssMatchSet) = "XssMatchSet",
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteByteMatchSetOutput in mod delete_byte_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteGeoMatchSetOutput in mod delete_geo_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteIpSetOutput in mod delete_ip_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteLoggingConfigurationOutput in mod delete_logging_configuration_output {}
}

structure! {
    pub struct DeletePermissionPolicyOutput in mod delete_permission_policy_output {}
}

structure! {
    pub struct DeleteRateBasedRuleOutput in mod delete_rate_based_rule_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRegexMatchSetOutput in mod delete_regex_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRegexPatternSetOutput in mod delete_regex_pattern_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRuleOutput in mod delete_rule_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteRuleGroupOutput in mod delete_rule_group_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteSizeConstraintSetOutput in mod delete_size_constraint_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteSqlInjectionMatchSetOutput in mod delete_sql_injection_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteWebAclOutput in mod delete_web_acl_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct DeleteXssMatchSetOutput in mod delete_xss_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct GetByteMatchSetOutput in mod get_byte_match_set_output {
        byte_match_set / set_byte_match_set: shape(ByteMatchSet) = "ByteMatchSet",
    }
}

structure! {
    pub struct GetChangeTokenOutput in mod get_change_token_output {
        /// The `ChangeToken` that you used in the request. Use this value in a
        /// `GetChangeTokenStatus` request to get the current status of the request.
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct GetChangeTokenStatusOutput in mod get_change_token_status_output {
        /// The status of the change token.
        change_token_status / set_change_token_status: shape(ChangeTokenStatus) = "ChangeTokenStatus",
    }
}

structure! {
    pub struct GetGeoMatchSetOutput in mod get_geo_match_set_output {
        geo_match_set / set_geo_match_set: shape(GeoMatchSet) = "GeoMatchSet",
    }
}

structure! {
    pub struct GetIpSetOutput in mod get_ip_set_output {
        ip_set / set_ip_set: shape(IpSet) = "IPSet",
    }
}

structure! {
    pub struct GetLoggingConfigurationOutput in mod get_logging_configuration_output {
        logging_configuration / set_logging_configuration: shape(LoggingConfiguration) = "LoggingConfiguration",
    }
}

structure! {
    pub struct GetPermissionPolicyOutput in mod get_permission_policy_output {
        /// The IAM policy attached to the specified RuleGroup.
        policy / set_policy: string = "Policy",
    }
}

structure! {
    pub struct GetRateBasedRuleOutput in mod get_rate_based_rule_output {
        rule / set_rule: shape(RateBasedRule) = "Rule",
    }
}

structure! {
    pub struct GetRateBasedRuleManagedKeysOutput in mod get_rate_based_rule_managed_keys_output {
        /// An array of IP addresses that currently are blocked by the specified `RateBasedRule`.
        managed_keys / set_managed_keys: list(String) = "ManagedKeys",
        /// A null value for `NextMarker` indicates that there are no more keys.
        next_marker / set_next_marker: string = "NextMarker",
    }
}

structure! {
    pub struct GetRegexMatchSetOutput in mod get_regex_match_set_output {
        regex_match_set / set_regex_match_set: shape(RegexMatchSet) = "RegexMatchSet",
    }
}

structure! {
    pub struct GetRegexPatternSetOutput in mod get_regex_pattern_set_output {
        regex_pattern_set / set_regex_pattern_set: shape(RegexPatternSet) = "RegexPatternSet",
    }
}

structure! {
    pub struct GetRuleOutput in mod get_rule_output {
        rule / set_rule: shape(Rule) = "Rule",
    }
}

structure! {
    pub struct GetRuleGroupOutput in mod get_rule_group_output {
        rule_group / set_rule_group: shape(RuleGroup) = "RuleGroup",
    }
}

structure! {
    pub struct GetSampledRequestsOutput in mod get_sampled_requests_output {
        /// A complex type that contains detailed information about each of the requests in the sample.
        sampled_requests / set_sampled_requests: list(SampledHttpRequest) = "SampledRequests",
        /// The total number of requests from which `GetSampledRequests` got a sample of
        /// `MaxItems` requests.
        population_size / set_population_size: value(i64) = "PopulationSize",
        /// Usually the time window that you specified in the request. If the window started
        /// more than three hours ago, this is the start of the retained window instead.
        time_window / set_time_window: shape(TimeWindow) = "TimeWindow",
    }
}

structure! {
    pub struct GetSizeConstraintSetOutput in mod get_size_constraint_set_output {
        size_constraint_set / set_size_constraint_set: shape(SizeConstraintSet) = "SizeConstraintSet",
    }
}

structure! {
    /// The response to a `GetSqlInjectionMatchSet` request.
    pub struct GetSqlInjectionMatchSetOutput in mod get_sql_injection_match_set_output {
        sql_injection_match_set / set_sql_injection_match_set: shape(SqlInjectionMatchSet) = "SqlInjectionMatchSet",
    }
}

structure! {
    pub struct GetWebAclOutput in mod get_web_acl_output {
        web_acl / set_web_acl: shape(WebAcl) = "WebACL",
    }
}

structure! {
    /// The response to a `GetXssMatchSet` request.
    pub struct GetXssMatchSetOutput in mod get_xss_match_set_output {
        xss_match_set / set_xss_match_set: shape(XssMatchSet) = "XssMatchSet",
    }
}

structure! {
    pub struct ListActivatedRulesInRuleGroupOutput in mod list_activated_rules_in_rule_group_output {
        /// Pass this value in the `NextMarker` of a later request to get the next batch.
        next_marker / set_next_marker: string = "NextMarker",
        activated_rules / set_activated_rules: list(ActivatedRule) = "ActivatedRules",
    }
}

structure! {
    pub struct ListByteMatchSetsOutput in mod list_byte_match_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        byte_match_sets / set_byte_match_sets: list(ByteMatchSetSummary) = "ByteMatchSets",
    }
}

structure! {
    pub struct ListGeoMatchSetsOutput in mod list_geo_match_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        geo_match_sets / set_geo_match_sets: list(GeoMatchSetSummary) = "GeoMatchSets",
    }
}

structure! {
    pub struct ListIpSetsOutput in mod list_ip_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        ip_sets / set_ip_sets: list(IpSetSummary) = "IPSets",
    }
}

structure! {
    pub struct ListLoggingConfigurationsOutput in mod list_logging_configurations_output {
        logging_configurations / set_logging_configurations: list(LoggingConfiguration) = "LoggingConfigurations",
        next_marker / set_next_marker: string = "NextMarker",
    }
}

structure! {
    pub struct ListRateBasedRulesOutput in mod list_rate_based_rules_output {
        next_marker / set_next_marker: string = "NextMarker",
        rules / set_rules: list(RuleSummary) = "Rules",
    }
}

structure! {
    pub struct ListRegexMatchSetsOutput in mod list_regex_match_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        regex_match_sets / set_regex_match_sets: list(RegexMatchSetSummary) = "RegexMatchSets",
    }
}

structure! {
    pub struct ListRegexPatternSetsOutput in mod list_regex_pattern_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        regex_pattern_sets / set_regex_pattern_sets: list(RegexPatternSetSummary) = "RegexPatternSets",
    }
}

structure! {
    pub struct ListRuleGroupsOutput in mod list_rule_groups_output {
        next_marker / set_next_marker: string = "NextMarker",
        rule_groups / set_rule_groups: list(RuleGroupSummary) = "RuleGroups",
    }
}

structure! {
    pub struct ListRulesOutput in mod list_rules_output {
        next_marker / set_next_marker: string = "NextMarker",
        rules / set_rules: list(RuleSummary) = "Rules",
    }
}

structure! {
    pub struct ListSizeConstraintSetsOutput in mod list_size_constraint_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        size_constraint_sets / set_size_constraint_sets: list(SizeConstraintSetSummary) = "SizeConstraintSets",
    }
}

structure! {
    /// The response to a `ListSqlInjectionMatchSets` request.
    pub struct ListSqlInjectionMatchSetsOutput in mod list_sql_injection_match_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        sql_injection_match_sets / set_sql_injection_match_sets: list(SqlInjectionMatchSetSummary) = "SqlInjectionMatchSets",
    }
}

structure! {
    pub struct ListSubscribedRuleGroupsOutput in mod list_subscribed_rule_groups_output {
        next_marker / set_next_marker: string = "NextMarker",
        rule_groups / set_rule_groups: list(SubscribedRuleGroupSummary) = "RuleGroups",
    }
}

structure! {
    pub struct ListTagsForResourceOutput in mod list_tags_for_resource_output {
        next_marker / set_next_marker: string = "NextMarker",
        tag_info_for_resource / set_tag_info_for_resource: shape(TagInfoForResource) = "TagInfoForResource",
    }
}

structure! {
    pub struct ListWebAclsOutput in mod list_web_acls_output {
        next_marker / set_next_marker: string = "NextMarker",
        web_acls / set_web_acls: list(WebAclSummary) = "WebACLs",
    }
}

structure! {
    /// The response to a `ListXssMatchSets` request.
    pub struct ListXssMatchSetsOutput in mod list_xss_match_sets_output {
        next_marker / set_next_marker: string = "NextMarker",
        xss_match_sets / set_xss_match_sets: list(XssMatchSetSummary) = "XssMatchSets",
    }
}

structure! {
    pub struct PutLoggingConfigurationOutput in mod put_logging_configuration_output {
        logging_configuration / set_logging_configuration: shape(LoggingConfiguration) = "LoggingConfiguration",
    }
}

structure! {
    pub struct PutPermissionPolicyOutput in mod put_permission_policy_output {}
}

structure! {
    pub struct TagResourceOutput in mod tag_resource_output {}
}

structure! {
    pub struct UntagResourceOutput in mod untag_resource_output {}
}

structure! {
    pub struct UpdateByteMatchSetOutput in mod update_byte_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateGeoMatchSetOutput in mod update_geo_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateIpSetOutput in mod update_ip_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRateBasedRuleOutput in mod update_rate_based_rule_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRegexMatchSetOutput in mod update_regex_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRegexPatternSetOutput in mod update_regex_pattern_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRuleOutput in mod update_rule_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateRuleGroupOutput in mod update_rule_group_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateSizeConstraintSetOutput in mod update_size_constraint_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateSqlInjectionMatchSetOutput in mod update_sql_injection_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateWebAclOutput in mod update_web_acl_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}

structure! {
    pub struct UpdateXssMatchSetOutput in mod update_xss_match_set_output {
        change_token / set_change_token: string = "ChangeToken",
    }
}
