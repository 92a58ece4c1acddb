/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::*;
use crate::input::*;
use crate::output::*;

/// Service name recorded in the metadata of every operation.
pub const SERVICE_NAME: &str = "waf";

// Operation names are the wire names, so acronyms keep their upper case here.
smithy_http::operation_inputs! {
    service = SERVICE_NAME;
    CreateByteMatchSet: CreateByteMatchSetInput => CreateByteMatchSetOutput, CreateByteMatchSetError;
    CreateGeoMatchSet: CreateGeoMatchSetInput => CreateGeoMatchSetOutput, CreateGeoMatchSetError;
    CreateIPSet: CreateIpSetInput => CreateIpSetOutput, CreateIpSetError;
    CreateRateBasedRule: CreateRateBasedRuleInput => CreateRateBasedRuleOutput, CreateRateBasedRuleError;
    CreateRegexMatchSet: CreateRegexMatchSetInput => CreateRegexMatchSetOutput, CreateRegexMatchSetError;
    CreateRegexPatternSet: CreateRegexPatternSetInput => CreateRegexPatternSetOutput, CreateRegexPatternSetError;
    CreateRule: CreateRuleInput => CreateRuleOutput, CreateRuleError;
    CreateRuleGroup: CreateRuleGroupInput => CreateRuleGroupOutput, CreateRuleGroupError;
    CreateSizeConstraintSet: CreateSizeConstraintSetInput => CreateSizeConstraintSetOutput, CreateSizeConstraintSetError;
    CreateSqlInjectionMatchSet: CreateSqlInjectionMatchSetInput => CreateSqlInjectionMatchSetOutput, CreateSqlInjectionMatchSetError;
    CreateWebACL: CreateWebAclInput => CreateWebAclOutput, CreateWebAclError;
    CreateWebACLMigrationStack: CreateWebAclMigrationStackInput => CreateWebAclMigrationStackOutput, CreateWebAclMigrationStackError;
    CreateXssMatchSet: CreateXssMatchSetInput => CreateXssMatchSetOutput, CreateXssMatchSetError;
    DeleteByteMatchSet: DeleteByteMatchSetInput => DeleteByteMatchSetOutput, DeleteByteMatchSetError;
    DeleteGeoMatchSet: DeleteGeoMatchSetInput => DeleteGeoMatchSetOutput, DeleteGeoMatchSetError;
    DeleteIPSet: DeleteIpSetInput => DeleteIpSetOutput, DeleteIpSetError;
    DeleteLoggingConfiguration: DeleteLoggingConfigurationInput => DeleteLoggingConfigurationOutput, DeleteLoggingConfigurationError;
    DeletePermissionPolicy: DeletePermissionPolicyInput => DeletePermissionPolicyOutput, DeletePermissionPolicyError;
    DeleteRateBasedRule: DeleteRateBasedRuleInput => DeleteRateBasedRuleOutput, DeleteRateBasedRuleError;
    DeleteRegexMatchSet: DeleteRegexMatchSetInput => DeleteRegexMatchSetOutput, DeleteRegexMatchSetError;
    DeleteRegexPatternSet: DeleteRegexPatternSetInput => DeleteRegexPatternSetOutput, DeleteRegexPatternSetError;
    DeleteRule: DeleteRuleInput => DeleteRuleOutput, DeleteRuleError;
    DeleteRuleGroup: DeleteRuleGroupInput => DeleteRuleGroupOutput, DeleteRuleGroupError;
    DeleteSizeConstraintSet: DeleteSizeConstraintSetInput => DeleteSizeConstraintSetOutput, DeleteSizeConstraintSetError;
    DeleteSqlInjectionMatchSet: DeleteSqlInjectionMatchSetInput => DeleteSqlInjectionMatchSetOutput, DeleteSqlInjectionMatchSetError;
    DeleteWebACL: DeleteWebAclInput => DeleteWebAclOutput, DeleteWebAclError;
    DeleteXssMatchSet: DeleteXssMatchSetInput => DeleteXssMatchSetOutput, DeleteXssMatchSetError;
    GetByteMatchSet: GetByteMatchSetInput => GetByteMatchSetOutput, GetByteMatchSetError;
    GetChangeToken: GetChangeTokenInput => GetChangeTokenOutput, GetChangeTokenError;
    GetChangeTokenStatus: GetChangeTokenStatusInput => GetChangeTokenStatusOutput, GetChangeTokenStatusError;
    GetGeoMatchSet: GetGeoMatchSetInput => GetGeoMatchSetOutput, GetGeoMatchSetError;
    GetIPSet: GetIpSetInput => GetIpSetOutput, GetIpSetError;
    GetLoggingConfiguration: GetLoggingConfigurationInput => GetLoggingConfigurationOutput, GetLoggingConfigurationError;
    GetPermissionPolicy: GetPermissionPolicyInput => GetPermissionPolicyOutput, GetPermissionPolicyError;
    GetRateBasedRule: GetRateBasedRuleInput => GetRateBasedRuleOutput, GetRateBasedRuleError;
    GetRateBasedRuleManagedKeys: GetRateBasedRuleManagedKeysInput => GetRateBasedRuleManagedKeysOutput, GetRateBasedRuleManagedKeysError;
    GetRegexMatchSet: GetRegexMatchSetInput => GetRegexMatchSetOutput, GetRegexMatchSetError;
    GetRegexPatternSet: GetRegexPatternSetInput => GetRegexPatternSetOutput, GetRegexPatternSetError;
    GetRule: GetRuleInput => GetRuleOutput, GetRuleError;
    GetRuleGroup: GetRuleGroupInput => GetRuleGroupOutput, GetRuleGroupError;
    GetSampledRequests: GetSampledRequestsInput => GetSampledRequestsOutput, GetSampledRequestsError;
    GetSizeConstraintSet: GetSizeConstraintSetInput => GetSizeConstraintSetOutput, GetSizeConstraintSetError;
    GetSqlInjectionMatchSet: GetSqlInjectionMatchSetInput => GetSqlInjectionMatchSetOutput, GetSqlInjectionMatchSetError;
    GetWebACL: GetWebAclInput => GetWebAclOutput, GetWebAclError;
    GetXssMatchSet: GetXssMatchSetInput => GetXssMatchSetOutput, GetXssMatchSetError;
    ListActivatedRulesInRuleGroup: ListActivatedRulesInRuleGroupInput => ListActivatedRulesInRuleGroupOutput, ListActivatedRulesInRuleGroupError;
    ListByteMatchSets: ListByteMatchSetsInput => ListByteMatchSetsOutput, ListByteMatchSetsError;
    ListGeoMatchSets: ListGeoMatchSetsInput => ListGeoMatchSetsOutput, ListGeoMatchSetsError;
    ListIPSets: ListIpSetsInput => ListIpSetsOutput, ListIpSetsError;
    ListLoggingConfigurations: ListLoggingConfigurationsInput => ListLoggingConfigurationsOutput, ListLoggingConfigurationsError;
    ListRateBasedRules: ListRateBasedRulesInput => ListRateBasedRulesOutput, ListRateBasedRulesError;
    ListRegexMatchSets: ListRegexMatchSetsInput => ListRegexMatchSetsOutput, ListRegexMatchSetsError;
    ListRegexPatternSets: ListRegexPatternSetsInput => ListRegexPatternSetsOutput, ListRegexPatternSetsError;
    ListRuleGroups: ListRuleGroupsInput => ListRuleGroupsOutput, ListRuleGroupsError;
    ListRules: ListRulesInput => ListRulesOutput, ListRulesError;
    ListSizeConstraintSets: ListSizeConstraintSetsInput => ListSizeConstraintSetsOutput, ListSizeConstraintSetsError;
    ListSqlInjectionMatchSets: ListSqlInjectionMatchSetsInput => ListSqlInjectionMatchSetsOutput, ListSqlInjectionMatchSetsError;
    ListSubscribedRuleGroups: ListSubscribedRuleGroupsInput => ListSubscribedRuleGroupsOutput, ListSubscribedRuleGroupsError;
    ListTagsForResource: ListTagsForResourceInput => ListTagsForResourceOutput, ListTagsForResourceError;
    ListWebACLs: ListWebAclsInput => ListWebAclsOutput, ListWebAclsError;
    ListXssMatchSets: ListXssMatchSetsInput => ListXssMatchSetsOutput, ListXssMatchSetsError;
    PutLoggingConfiguration: PutLoggingConfigurationInput => PutLoggingConfigurationOutput, PutLoggingConfigurationError;
    PutPermissionPolicy: PutPermissionPolicyInput => PutPermissionPolicyOutput, PutPermissionPolicyError;
    TagResource: TagResourceInput => TagResourceOutput, TagResourceError;
    UntagResource: UntagResourceInput => UntagResourceOutput, UntagResourceError;
    UpdateByteMatchSet: UpdateByteMatchSetInput => UpdateByteMatchSetOutput, UpdateByteMatchSetError;
    UpdateGeoMatchSet: UpdateGeoMatchSetInput => UpdateGeoMatchSetOutput, UpdateGeoMatchSetError;
    UpdateIPSet: UpdateIpSetInput => UpdateIpSetOutput, UpdateIpSetError;
    UpdateRateBasedRule: UpdateRateBasedRuleInput => UpdateRateBasedRuleOutput, UpdateRateBasedRuleError;
    UpdateRegexMatchSet: UpdateRegexMatchSetInput => UpdateRegexMatchSetOutput, UpdateRegexMatchSetError;
    UpdateRegexPatternSet: UpdateRegexPatternSetInput => UpdateRegexPatternSetOutput, UpdateRegexPatternSetError;
    UpdateRule: UpdateRuleInput => UpdateRuleOutput, UpdateRuleError;
    UpdateRuleGroup: UpdateRuleGroupInput => UpdateRuleGroupOutput, UpdateRuleGroupError;
    UpdateSizeConstraintSet: UpdateSizeConstraintSetInput => UpdateSizeConstraintSetOutput, UpdateSizeConstraintSetError;
    UpdateSqlInjectionMatchSet: UpdateSqlInjectionMatchSetInput => UpdateSqlInjectionMatchSetOutput, UpdateSqlInjectionMatchSetError;
    UpdateWebACL: UpdateWebAclInput => UpdateWebAclOutput, UpdateWebAclError;
    UpdateXssMatchSet: UpdateXssMatchSetInput => UpdateXssMatchSetOutput, UpdateXssMatchSetError;
}

#[cfg(test)]
mod test {
    use crate::input::{
        GetChangeTokenInput, ListWebAclsInput, UpdateIpSetInput, UpdateXssMatchSetInput,
    };
    use smithy_http::operation::OperationInput;

    #[test]
    fn operation_names_match_the_wire() {
        assert_eq!(GetChangeTokenInput::metadata().name(), "GetChangeToken");
        assert_eq!(UpdateIpSetInput::metadata().name(), "UpdateIPSet");
        assert_eq!(ListWebAclsInput::metadata().name(), "ListWebACLs");
        assert_eq!(UpdateXssMatchSetInput::metadata().name(), "UpdateXssMatchSet");
        assert_eq!(ListWebAclsInput::metadata().service(), "waf");
    }
}
