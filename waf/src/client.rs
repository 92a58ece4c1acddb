/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::{Config, TARGET_PREFIX};
use crate::error::*;
use crate::input::*;
use crate::output::*;
use smithy_client::bounds::SmithyConnector;
use smithy_http::operation::OperationInput;
use smithy_http::response::ResponseMetadata;
use smithy_http::result::SdkError;
use std::sync::Arc;

/// Client for AWS WAF Classic.
///
/// Changes to WAF objects follow the change token protocol: fetch a token with
/// [`get_change_token`](Client::get_change_token), pass it to one create, update or delete
/// call, then poll [`get_change_token_status`](Client::get_change_token_status).
///
/// ```rust,no_run
/// use waf::input::{CreateIpSetInput, GetChangeTokenInput};
/// use waf::{Client, Config};
///
/// async fn create_ip_set<C>(client: &Client<C>) -> Result<(), Box<dyn std::error::Error>>
/// where
///     C: smithy_client::bounds::SmithyConnector,
/// {
///     let token = client.get_change_token(GetChangeTokenInput::builder().build()).await?;
///     let created = client
///         .create_ip_set(
///             CreateIpSetInput::builder()
///                 .name("office")
///                 .set_change_token(token.change_token)
///                 .build(),
///         )
///         .await?;
///     println!("{:?}", created.ip_set());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client<C> {
    inner: smithy_client::Client<C>,
    conf: Arc<Config>,
}

impl<C: Clone> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            inner: self.inner.clone(),
            conf: self.conf.clone(),
        }
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let inner = smithy_client::Builder::new()
            .connector(conn)
            .metadata_cache_capacity(conf.metadata_cache_capacity())
            .build();
        tracing::debug!(endpoint = %conf.endpoint(), region = ?conf.region(), "created waf client");
        Client {
            inner,
            conf: Arc::new(conf),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }

    /// Releases the client. Later calls fail with a construction failure and never reach
    /// the connector. Shutting down twice is harmless.
    pub fn shutdown(&self) {
        self.inner.shutdown()
    }

    /// Request id and status of the latest call made with `input`, while it is still cached.
    pub fn cached_response_metadata<I: OperationInput>(&self, input: &I) -> Option<ResponseMetadata> {
        self.inner.cached_response_metadata(input)
    }
}

macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $method:ident($input:ident) -> $output:ident, $error:ident;
    )*) => {
        impl<C> Client<C>
        where
            C: SmithyConnector,
        {
            $(
                $(#[$meta])*
                pub async fn $method(&self, input: $input) -> Result<$output, SdkError<$error>> {
                    self.inner
                        .call(self.conf.endpoint.uri(), TARGET_PREFIX, input)
                        .await
                }
            )*
        }
    };
}

operations! {
    /// Creates a `ByteMatchSet`. Add `ByteMatchTuple` objects to it with `UpdateByteMatchSet`.
    create_byte_match_set(CreateByteMatchSetInput) -> CreateByteMatchSetOutput, CreateByteMatchSetError;
    /// Creates an empty `GeoMatchSet` that specifies the countries to inspect requests from.
    create_geo_match_set(CreateGeoMatchSetInput) -> CreateGeoMatchSetOutput, CreateGeoMatchSetError;
    /// Creates an `IPSet`, which you use to specify the IP addresses that web requests originate from.
    create_ip_set(CreateIpSetInput) -> CreateIpSetOutput, CreateIpSetError;
    /// Creates a `RateBasedRule`, which counts the requests that arrive from one IP address
    /// every five minutes and acts once they exceed `RateLimit`.
    create_rate_based_rule(CreateRateBasedRuleInput) -> CreateRateBasedRuleOutput, CreateRateBasedRuleError;
    /// Creates a `RegexMatchSet`.
    create_regex_match_set(CreateRegexMatchSetInput) -> CreateRegexMatchSetOutput, CreateRegexMatchSetError;
    /// Creates a `RegexPatternSet`.
    create_regex_pattern_set(CreateRegexPatternSetInput) -> CreateRegexPatternSetOutput, CreateRegexPatternSetError;
    /// Creates a `Rule`, which contains the `IPSet` objects, `ByteMatchSet` objects and other
    /// predicates that identify the requests that you want to block.
    create_rule(CreateRuleInput) -> CreateRuleOutput, CreateRuleError;
    /// Creates a `RuleGroup`. A rule group is a collection of predefined rules that you add to a web ACL.
    create_rule_group(CreateRuleGroupInput) -> CreateRuleGroupOutput, CreateRuleGroupError;
    /// Creates a `SizeConstraintSet`.
    create_size_constraint_set(CreateSizeConstraintSetInput) -> CreateSizeConstraintSetOutput, CreateSizeConstraintSetError;
    /// Creates a `SqlInjectionMatchSet`, which you use to allow, block, or count requests that
    /// contain snippets of SQL code in a specified part of web requests.
    create_sql_injection_match_set(CreateSqlInjectionMatchSetInput) -> CreateSqlInjectionMatchSetOutput, CreateSqlInjectionMatchSetError;
    /// Creates a `WebACL`, which contains the `Rules` that identify the CloudFront web requests
    /// that you want to allow, block, or count.
    create_web_acl(CreateWebAclInput) -> CreateWebAclOutput, CreateWebAclError;
    /// Creates an AWS CloudFormation WAFV2 template for the specified web ACL in the specified
    /// Amazon S3 bucket.
    create_web_acl_migration_stack(CreateWebAclMigrationStackInput) -> CreateWebAclMigrationStackOutput, CreateWebAclMigrationStackError;
    /// Creates an `XssMatchSet`, which you use to allow, block, or count requests that contain
    /// cross-site scripting attacks in the specified part of web requests.
    create_xss_match_set(CreateXssMatchSetInput) -> CreateXssMatchSetOutput, CreateXssMatchSetError;
    /// Permanently deletes a `ByteMatchSet`.
    delete_byte_match_set(DeleteByteMatchSetInput) -> DeleteByteMatchSetOutput, DeleteByteMatchSetError;
    /// Permanently deletes a `GeoMatchSet`.
    delete_geo_match_set(DeleteGeoMatchSetInput) -> DeleteGeoMatchSetOutput, DeleteGeoMatchSetError;
    /// Permanently deletes a `IPSet`.
    delete_ip_set(DeleteIpSetInput) -> DeleteIpSetOutput, DeleteIpSetError;
    /// Permanently deletes the `LoggingConfiguration` from the specified web ACL.
    delete_logging_configuration(DeleteLoggingConfigurationInput) -> DeleteLoggingConfigurationOutput, DeleteLoggingConfigurationError;
    /// Permanently deletes an IAM policy from the specified `RuleGroup`.
    delete_permission_policy(DeletePermissionPolicyInput) -> DeletePermissionPolicyOutput, DeletePermissionPolicyError;
    /// Permanently deletes a `RateBasedRule`.
    delete_rate_based_rule(DeleteRateBasedRuleInput) -> DeleteRateBasedRuleOutput, DeleteRateBasedRuleError;
    /// Permanently deletes a `RegexMatchSet`.
    delete_regex_match_set(DeleteRegexMatchSetInput) -> DeleteRegexMatchSetOutput, DeleteRegexMatchSetError;
    /// Permanently deletes a `RegexPatternSet`.
    delete_regex_pattern_set(DeleteRegexPatternSetInput) -> DeleteRegexPatternSetOutput, DeleteRegexPatternSetError;
    /// Permanently deletes a `Rule`.
    delete_rule(DeleteRuleInput) -> DeleteRuleOutput, DeleteRuleError;
    /// Permanently deletes a `RuleGroup`.
    delete_rule_group(DeleteRuleGroupInput) -> DeleteRuleGroupOutput, DeleteRuleGroupError;
    /// Permanently deletes a `SizeConstraintSet`.
    delete_size_constraint_set(DeleteSizeConstraintSetInput) -> DeleteSizeConstraintSetOutput, DeleteSizeConstraintSetError;
    /// Permanently deletes a `SqlInjectionMatchSet`.
    delete_sql_injection_match_set(DeleteSqlInjectionMatchSetInput) -> DeleteSqlInjectionMatchSetOutput, DeleteSqlInjectionMatchSetError;
    /// Permanently deletes a `WebACL`.
    delete_web_acl(DeleteWebAclInput) -> DeleteWebAclOutput, DeleteWebAclError;
    /// Permanently deletes a `XssMatchSet`.
    delete_xss_match_set(DeleteXssMatchSetInput) -> DeleteXssMatchSetOutput, DeleteXssMatchSetError;
    /// Returns the `ByteMatchSet` specified by its id.
    get_byte_match_set(GetByteMatchSetInput) -> GetByteMatchSetOutput, GetByteMatchSetError;
    /// Returns a change token to use in a create, update, or delete request.
    ///
    /// Each create, update, or delete request must use a unique change token. A token that
    /// has already been used fails with `WAFStaleDataException`.
    get_change_token(GetChangeTokenInput) -> GetChangeTokenOutput, GetChangeTokenError;
    /// Returns the status of a `ChangeToken`: `PROVISIONED`, `PENDING` or `INSYNC`.
    get_change_token_status(GetChangeTokenStatusInput) -> GetChangeTokenStatusOutput, GetChangeTokenStatusError;
    /// Returns the `GeoMatchSet` specified by its id.
    get_geo_match_set(GetGeoMatchSetInput) -> GetGeoMatchSetOutput, GetGeoMatchSetError;
    /// Returns the `IPSet` specified by its id.
    get_ip_set(GetIpSetInput) -> GetIpSetOutput, GetIpSetError;
    /// Returns the `LoggingConfiguration` specified by its id.
    get_logging_configuration(GetLoggingConfigurationInput) -> GetLoggingConfigurationOutput, GetLoggingConfigurationError;
    /// Returns the `PermissionPolicy` specified by its id.
    get_permission_policy(GetPermissionPolicyInput) -> GetPermissionPolicyOutput, GetPermissionPolicyError;
    /// Returns the `RateBasedRule` specified by its id.
    get_rate_based_rule(GetRateBasedRuleInput) -> GetRateBasedRuleOutput, GetRateBasedRuleError;
    /// Returns an array of IP addresses currently being blocked by the `RateBasedRule`.
    get_rate_based_rule_managed_keys(GetRateBasedRuleManagedKeysInput) -> GetRateBasedRuleManagedKeysOutput, GetRateBasedRuleManagedKeysError;
    /// Returns the `RegexMatchSet` specified by its id.
    get_regex_match_set(GetRegexMatchSetInput) -> GetRegexMatchSetOutput, GetRegexMatchSetError;
    /// Returns the `RegexPatternSet` specified by its id.
    get_regex_pattern_set(GetRegexPatternSetInput) -> GetRegexPatternSetOutput, GetRegexPatternSetError;
    /// Returns the `Rule` specified by its id.
    get_rule(GetRuleInput) -> GetRuleOutput, GetRuleError;
    /// Returns the `RuleGroup` specified by its id.
    get_rule_group(GetRuleGroupInput) -> GetRuleGroupOutput, GetRuleGroupError;
    /// Gets detailed information about a specified number of requests, a sample, that AWS WAF
    /// randomly selects from among the first 5,000 requests that your AWS resource received
    /// during a time range that you choose.
    get_sampled_requests(GetSampledRequestsInput) -> GetSampledRequestsOutput, GetSampledRequestsError;
    /// Returns the `SizeConstraintSet` specified by its id.
    get_size_constraint_set(GetSizeConstraintSetInput) -> GetSizeConstraintSetOutput, GetSizeConstraintSetError;
    /// Returns the `SqlInjectionMatchSet` specified by its id.
    get_sql_injection_match_set(GetSqlInjectionMatchSetInput) -> GetSqlInjectionMatchSetOutput, GetSqlInjectionMatchSetError;
    /// Returns the `WebACL` specified by its id.
    get_web_acl(GetWebAclInput) -> GetWebAclOutput, GetWebAclError;
    /// Returns the `XssMatchSet` specified by its id.
    get_xss_match_set(GetXssMatchSetInput) -> GetXssMatchSetOutput, GetXssMatchSetError;
    /// Returns an array of `ActivatedRule` objects.
    list_activated_rules_in_rule_group(ListActivatedRulesInRuleGroupInput) -> ListActivatedRulesInRuleGroupOutput, ListActivatedRulesInRuleGroupError;
    /// Returns an array of `ByteMatchSetSummary` objects.
    list_byte_match_sets(ListByteMatchSetsInput) -> ListByteMatchSetsOutput, ListByteMatchSetsError;
    /// Returns an array of `GeoMatchSetSummary` objects.
    list_geo_match_sets(ListGeoMatchSetsInput) -> ListGeoMatchSetsOutput, ListGeoMatchSetsError;
    /// Returns an array of `IPSetSummary` objects.
    list_ip_sets(ListIpSetsInput) -> ListIpSetsOutput, ListIpSetsError;
    /// Returns an array of `LoggingConfiguration` objects.
    list_logging_configurations(ListLoggingConfigurationsInput) -> ListLoggingConfigurationsOutput, ListLoggingConfigurationsError;
    /// Returns an array of `RuleSummary` objects for the rate-based rules.
    list_rate_based_rules(ListRateBasedRulesInput) -> ListRateBasedRulesOutput, ListRateBasedRulesError;
    /// Returns an array of `RegexMatchSetSummary` objects.
    list_regex_match_sets(ListRegexMatchSetsInput) -> ListRegexMatchSetsOutput, ListRegexMatchSetsError;
    /// Returns an array of `RegexPatternSetSummary` objects.
    list_regex_pattern_sets(ListRegexPatternSetsInput) -> ListRegexPatternSetsOutput, ListRegexPatternSetsError;
    /// Returns an array of `RuleGroupSummary` objects.
    list_rule_groups(ListRuleGroupsInput) -> ListRuleGroupsOutput, ListRuleGroupsError;
    /// Returns an array of `RuleSummary` objects.
    list_rules(ListRulesInput) -> ListRulesOutput, ListRulesError;
    /// Returns an array of `SizeConstraintSetSummary` objects.
    list_size_constraint_sets(ListSizeConstraintSetsInput) -> ListSizeConstraintSetsOutput, ListSizeConstraintSetsError;
    /// Returns an array of `SqlInjectionMatchSetSummary` objects.
    list_sql_injection_match_sets(ListSqlInjectionMatchSetsInput) -> ListSqlInjectionMatchSetsOutput, ListSqlInjectionMatchSetsError;
    /// Returns an array of `RuleGroup` objects that you are subscribed to.
    list_subscribed_rule_groups(ListSubscribedRuleGroupsInput) -> ListSubscribedRuleGroupsOutput, ListSubscribedRuleGroupsError;
    /// Returns the tags associated with the specified AWS resource.
    list_tags_for_resource(ListTagsForResourceInput) -> ListTagsForResourceOutput, ListTagsForResourceError;
    /// Returns an array of `WebACLSummary` objects.
    list_web_acls(ListWebAclsInput) -> ListWebAclsOutput, ListWebAclsError;
    /// Returns an array of `XssMatchSetSummary` objects.
    list_xss_match_sets(ListXssMatchSetsInput) -> ListXssMatchSetsOutput, ListXssMatchSetsError;
    /// Associates a `LoggingConfiguration` with a specified web ACL.
    put_logging_configuration(PutLoggingConfigurationInput) -> PutLoggingConfigurationOutput, PutLoggingConfigurationError;
    /// Attaches an IAM policy to the specified `RuleGroup` to share it across accounts.
    put_permission_policy(PutPermissionPolicyInput) -> PutPermissionPolicyOutput, PutPermissionPolicyError;
    /// Associates tags with the specified AWS resource.
    tag_resource(TagResourceInput) -> TagResourceOutput, TagResourceError;
    /// Removes tags from the specified AWS resource.
    untag_resource(UntagResourceInput) -> UntagResourceOutput, UntagResourceError;
    /// Inserts or deletes entries in a `ByteMatchSet`.
    update_byte_match_set(UpdateByteMatchSetInput) -> UpdateByteMatchSetOutput, UpdateByteMatchSetError;
    /// Inserts or deletes entries in a `GeoMatchSet`.
    update_geo_match_set(UpdateGeoMatchSetInput) -> UpdateGeoMatchSetOutput, UpdateGeoMatchSetError;
    /// Inserts or deletes entries in a `IPSet`.
    update_ip_set(UpdateIpSetInput) -> UpdateIpSetOutput, UpdateIpSetError;
    /// Inserts or deletes entries in a `RateBasedRule`.
    update_rate_based_rule(UpdateRateBasedRuleInput) -> UpdateRateBasedRuleOutput, UpdateRateBasedRuleError;
    /// Inserts or deletes entries in a `RegexMatchSet`.
    update_regex_match_set(UpdateRegexMatchSetInput) -> UpdateRegexMatchSetOutput, UpdateRegexMatchSetError;
    /// Inserts or deletes entries in a `RegexPatternSet`.
    update_regex_pattern_set(UpdateRegexPatternSetInput) -> UpdateRegexPatternSetOutput, UpdateRegexPatternSetError;
    /// Inserts or deletes entries in a `Rule`.
    update_rule(UpdateRuleInput) -> UpdateRuleOutput, UpdateRuleError;
    /// Inserts or deletes entries in a `RuleGroup`.
    update_rule_group(UpdateRuleGroupInput) -> UpdateRuleGroupOutput, UpdateRuleGroupError;
    /// Inserts or deletes entries in a `SizeConstraintSet`.
    update_size_constraint_set(UpdateSizeConstraintSetInput) -> UpdateSizeConstraintSetOutput, UpdateSizeConstraintSetError;
    /// Inserts or deletes entries in a `SqlInjectionMatchSet`.
    update_sql_injection_match_set(UpdateSqlInjectionMatchSetInput) -> UpdateSqlInjectionMatchSetOutput, UpdateSqlInjectionMatchSetError;
    /// Inserts or deletes `ActivatedRule` objects in a `WebACL`, and optionally changes its
    /// default action.
    update_web_acl(UpdateWebAclInput) -> UpdateWebAclOutput, UpdateWebAclError;
    /// Inserts or deletes entries in a `XssMatchSet`.
    update_xss_match_set(UpdateXssMatchSetInput) -> UpdateXssMatchSetOutput, UpdateXssMatchSetError;
}
