/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared by the inputs and outputs of the AWS WAF Classic operations.
//!
//! Resource ids, names and metric names are 1 to 128 characters matching `.*\S.*`. Change
//! tokens are 1 to 128 characters. These limits are not checked before a request is sent.

use smithy_types::{string_enum, structure, Blob, Instant};

string_enum! {
    /// Whether an update inserts an object into a set or deletes it.
    pub enum ChangeAction {
        Insert = "INSERT",
        Delete = "DELETE",
    }
}

string_enum! {
    /// Propagation state of a change token.
    pub enum ChangeTokenStatus {
        Provisioned = "PROVISIONED",
        Pending = "PENDING",
        Insync = "INSYNC",
    }
}

string_enum! {
    /// How a [`SizeConstraint`] compares the request part with its `Size`.
    pub enum ComparisonOperator {
        Eq = "EQ",
        Ne = "NE",
        Le = "LE",
        Lt = "LT",
        Ge = "GE",
        Gt = "GT",
    }
}

string_enum! {
    pub enum GeoMatchConstraintType {
        Country = "Country",
    }
}

string_enum! {
    /// ISO 3166-1 alpha-2 code of a country a [`GeoMatchConstraint`] matches.
    pub enum GeoMatchConstraintValue {
        Af = "AF",
        Ax = "AX",
        Al = "AL",
        Dz = "DZ",
        As = "AS",
        Ad = "AD",
        Ao = "AO",
        Ai = "AI",
        Aq = "AQ",
        Ag = "AG",
        Ar = "AR",
        Am = "AM",
        Aw = "AW",
        Au = "AU",
        At = "AT",
        Az = "AZ",
        Bs = "BS",
        Bh = "BH",
        Bd = "BD",
        Bb = "BB",
        By = "BY",
        Be = "BE",
        Bz = "BZ",
        Bj = "BJ",
        Bm = "BM",
        Bt = "BT",
        Bo = "BO",
        Bq = "BQ",
        Ba = "BA",
        Bw = "BW",
        Bv = "BV",
        Br = "BR",
        Io = "IO",
        Bn = "BN",
        Bg = "BG",
        Bf = "BF",
        Bi = "BI",
        Kh = "KH",
        Cm = "CM",
        Ca = "CA",
        Cv = "CV",
        Ky = "KY",
        Cf = "CF",
        Td = "TD",
        Cl = "CL",
        Cn = "CN",
        Cx = "CX",
        Cc = "CC",
        Co = "CO",
        Km = "KM",
        Cg = "CG",
        Cd = "CD",
        Ck = "CK",
        Cr = "CR",
        Ci = "CI",
        Hr = "HR",
        Cu = "CU",
        Cw = "CW",
        Cy = "CY",
        Cz = "CZ",
        Dk = "DK",
        Dj = "DJ",
        Dm = "DM",
        Do = "DO",
        Ec = "EC",
        Eg = "EG",
        Sv = "SV",
        Gq = "GQ",
        Er = "ER",
        Ee = "EE",
        Et = "ET",
        Fk = "FK",
        Fo = "FO",
        Fj = "FJ",
        Fi = "FI",
        Fr = "FR",
        Gf = "GF",
        Pf = "PF",
        Tf = "TF",
        Ga = "GA",
        Gm = "GM",
        Ge = "GE",
        De = "DE",
        Gh = "GH",
        Gi = "GI",
        Gr = "GR",
        Gl = "GL",
        Gd = "GD",
        Gp = "GP",
        Gu = "GU",
        Gt = "GT",
        Gg = "GG",
        Gn = "GN",
        Gw = "GW",
        Gy = "GY",
        Ht = "HT",
        Hm = "HM",
        Va = "VA",
        Hn = "HN",
        Hk = "HK",
        Hu = "HU",
        Is = "IS",
        In = "IN",
        Id = "ID",
        Ir = "IR",
        Iq = "IQ",
        Ie = "IE",
        Im = "IM",
        Il = "IL",
        It = "IT",
        Jm = "JM",
        Jp = "JP",
        Je = "JE",
        Jo = "JO",
        Kz = "KZ",
        Ke = "KE",
        Ki = "KI",
        Kp = "KP",
        Kr = "KR",
        Kw = "KW",
        Kg = "KG",
        La = "LA",
        Lv = "LV",
        Lb = "LB",
        Ls = "LS",
        Lr = "LR",
        Ly = "LY",
        Li = "LI",
        Lt = "LT",
        Lu = "LU",
        Mo = "MO",
        Mk = "MK",
        Mg = "MG",
        Mw = "MW",
        My = "MY",
        Mv = "MV",
        Ml = "ML",
        Mt = "MT",
        Mh = "MH",
        Mq = "MQ",
        Mr = "MR",
        Mu = "MU",
        Yt = "YT",
        Mx = "MX",
        Fm = "FM",
        Md = "MD",
        Mc = "MC",
        Mn = "MN",
        Me = "ME",
        Ms = "MS",
        Ma = "MA",
        Mz = "MZ",
        Mm = "MM",
        Na = "NA",
        Nr = "NR",
        Np = "NP",
        Nl = "NL",
        Nc = "NC",
        Nz = "NZ",
        Ni = "NI",
        Ne = "NE",
        Ng = "NG",
        Nu = "NU",
        Nf = "NF",
        Mp = "MP",
        No = "NO",
        Om = "OM",
        Pk = "PK",
        Pw = "PW",
        Ps = "PS",
        Pa = "PA",
        Pg = "PG",
        Py = "PY",
        Pe = "PE",
        Ph = "PH",
        Pn = "PN",
        Pl = "PL",
        Pt = "PT",
        Pr = "PR",
        Qa = "QA",
        Re = "RE",
        Ro = "RO",
        Ru = "RU",
        Rw = "RW",
        Bl = "BL",
        Sh = "SH",
        Kn = "KN",
        Lc = "LC",
        Mf = "MF",
        Pm = "PM",
        Vc = "VC",
        Ws = "WS",
        Sm = "SM",
        St = "ST",
        Sa = "SA",
        Sn = "SN",
        Rs = "RS",
        Sc = "SC",
        Sl = "SL",
        Sg = "SG",
        Sx = "SX",
        Sk = "SK",
        Si = "SI",
        Sb = "SB",
        So = "SO",
        Za = "ZA",
        Gs = "GS",
        Ss = "SS",
        Es = "ES",
        Lk = "LK",
        Sd = "SD",
        Sr = "SR",
        Sj = "SJ",
        Sz = "SZ",
        Se = "SE",
        Ch = "CH",
        Sy = "SY",
        Tw = "TW",
        Tj = "TJ",
        Tz = "TZ",
        Th = "TH",
        Tl = "TL",
        Tg = "TG",
        Tk = "TK",
        To = "TO",
        Tt = "TT",
        Tn = "TN",
        Tr = "TR",
        Tm = "TM",
        Tc = "TC",
        Tv = "TV",
        Ug = "UG",
        Ua = "UA",
        Ae = "AE",
        Gb = "GB",
        Us = "US",
        Um = "UM",
        Uy = "UY",
        Uz = "UZ",
        Vu = "VU",
        Ve = "VE",
        Vn = "VN",
        Vg = "VG",
        Vi = "VI",
        Wf = "WF",
        Eh = "EH",
        Ye = "YE",
        Zm = "ZM",
        Zw = "ZW",
    }
}

string_enum! {
    pub enum IpSetDescriptorType {
        Ipv4 = "IPV4",
        Ipv6 = "IPV6",
    }
}

string_enum! {
    /// The part of a web request inspected by a filter.
    pub enum MatchFieldType {
        Uri = "URI",
        QueryString = "QUERY_STRING",
        Header = "HEADER",
        Method = "METHOD",
        Body = "BODY",
        SingleQueryArg = "SINGLE_QUERY_ARG",
        AllQueryArgs = "ALL_QUERY_ARGS",
    }
}

string_enum! {
    /// Why a web ACL could not be migrated.
    pub enum MigrationErrorType {
        EntityNotSupported = "ENTITY_NOT_SUPPORTED",
        EntityNotFound = "ENTITY_NOT_FOUND",
        S3BucketNoPermission = "S3_BUCKET_NO_PERMISSION",
        S3BucketNotAccessible = "S3_BUCKET_NOT_ACCESSIBLE",
        S3BucketNotFound = "S3_BUCKET_NOT_FOUND",
        S3BucketInvalidRegion = "S3_BUCKET_INVALID_REGION",
        S3InternalError = "S3_INTERNAL_ERROR",
    }
}

string_enum! {
    /// The request field reported by a `WAFInvalidParameterException`.
    pub enum ParameterExceptionField {
        ChangeAction = "CHANGE_ACTION",
        WafAction = "WAF_ACTION",
        WafOverrideAction = "WAF_OVERRIDE_ACTION",
        PredicateType = "PREDICATE_TYPE",
        IpsetType = "IPSET_TYPE",
        ByteMatchFieldType = "BYTE_MATCH_FIELD_TYPE",
        SqlInjectionMatchFieldType = "SQL_INJECTION_MATCH_FIELD_TYPE",
        ByteMatchTextTransformation = "BYTE_MATCH_TEXT_TRANSFORMATION",
        ByteMatchPositionalConstraint = "BYTE_MATCH_POSITIONAL_CONSTRAINT",
        SizeConstraintComparisonOperator = "SIZE_CONSTRAINT_COMPARISON_OPERATOR",
        GeoMatchLocationType = "GEO_MATCH_LOCATION_TYPE",
        GeoMatchLocationValue = "GEO_MATCH_LOCATION_VALUE",
        RateKey = "RATE_KEY",
        RuleType = "RULE_TYPE",
        NextMarker = "NEXT_MARKER",
        ResourceArn = "RESOURCE_ARN",
        Tags = "TAGS",
        TagKeys = "TAG_KEYS",
    }
}

string_enum! {
    pub enum ParameterExceptionReason {
        InvalidOption = "INVALID_OPTION",
        IllegalCombination = "ILLEGAL_COMBINATION",
        IllegalArgument = "ILLEGAL_ARGUMENT",
        InvalidTagKey = "INVALID_TAG_KEY",
    }
}

string_enum! {
    /// Where in the inspected part a [`ByteMatchTuple`] looks for its target string.
    pub enum PositionalConstraint {
        Exactly = "EXACTLY",
        StartsWith = "STARTS_WITH",
        EndsWith = "ENDS_WITH",
        Contains = "CONTAINS",
        ContainsWord = "CONTAINS_WORD",
    }
}

string_enum! {
    /// The kind of set a [`Predicate`] refers to.
    pub enum PredicateType {
        IpMatch = "IPMatch",
        ByteMatch = "ByteMatch",
        SqlInjectionMatch = "SqlInjectionMatch",
        GeoMatch = "GeoMatch",
        SizeConstraint = "SizeConstraint",
        XssMatch = "XssMatch",
        RegexMatch = "RegexMatch",
    }
}

string_enum! {
    pub enum RateKey {
        Ip = "IP",
    }
}

string_enum! {
    /// Transformation applied to the request part before it is inspected.
    pub enum TextTransformation {
        None = "NONE",
        CompressWhiteSpace = "COMPRESS_WHITE_SPACE",
        HtmlEntityDecode = "HTML_ENTITY_DECODE",
        Lowercase = "LOWERCASE",
        CmdLine = "CMD_LINE",
        UrlDecode = "URL_DECODE",
    }
}

string_enum! {
    pub enum WafActionType {
        Block = "BLOCK",
        Allow = "ALLOW",
        Count = "COUNT",
    }
}

string_enum! {
    pub enum WafOverrideActionType {
        None = "NONE",
        Count = "COUNT",
    }
}

string_enum! {
    pub enum WafRuleType {
        Regular = "REGULAR",
        RateBased = "RATE_BASED",
        Group = "GROUP",
    }
}

structure! {
    /// The `ActivatedRule` object in an `UpdateWebACL` request specifies a `Rule` that you
    /// want to insert or delete, the priority of the `Rule` in the `WebACL`, and the action
    /// that you want AWS WAF to take when a web request matches the `Rule`.
    pub struct ActivatedRule in mod activated_rule {
        /// Specifies the order in which the `Rules` in a `WebACL` are evaluated. Rules with a
        /// lower value for `Priority` are evaluated before `Rules` with a higher value.
        priority / set_priority: value(i32) = "Priority",
        /// The `RuleId` for a `Rule`.
        ///
        /// Length: 1 to 128. Pattern: `.*\S.*`
        rule_id / set_rule_id: string = "RuleId",
        /// Specifies the action that CloudFront or AWS WAF takes when a web request matches
        /// the conditions in the `Rule`. Used for `REGULAR` and `RATE_BASED` rules only.
        action / set_action: shape(WafAction) = "Action",
        /// Use the `OverrideAction` to test your `RuleGroup`. Used for `GROUP` rules only.
        override_action / set_override_action: shape(WafOverrideAction) = "OverrideAction",
        /// The rule type. The default is `REGULAR`.
        r#type / set_type: shape(WafRuleType) = "Type",
        /// An array of rules to exclude from a rule group. At most 100.
        excluded_rules / set_excluded_rules: list(ExcludedRule) = "ExcludedRules",
    }
}

structure! {
    /// Contains the identifier and the name of a `ByteMatchSet`, and the settings that specify
    /// the bytes that you want AWS WAF to search for in web requests.
    pub struct ByteMatchSet in mod byte_match_set {
        byte_match_set_id / set_byte_match_set_id: string = "ByteMatchSetId",
        name / set_name: string = "Name",
        /// Specifies the bytes that you want AWS WAF to search for.
        byte_match_tuples / set_byte_match_tuples: list(ByteMatchTuple) = "ByteMatchTuples",
    }
}

structure! {
    /// Returned by `ListByteMatchSets`.
    pub struct ByteMatchSetSummary in mod byte_match_set_summary {
        byte_match_set_id / set_byte_match_set_id: string = "ByteMatchSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    /// In an `UpdateByteMatchSet` request, specifies whether to insert or delete a
    /// `ByteMatchTuple`.
    pub struct ByteMatchSetUpdate in mod byte_match_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        byte_match_tuple / set_byte_match_tuple: shape(ByteMatchTuple) = "ByteMatchTuple",
    }
}

structure! {
    /// The bytes and the part of a web request that AWS WAF searches.
    pub struct ByteMatchTuple in mod byte_match_tuple {
        field_to_match / set_field_to_match: shape(FieldToMatch) = "FieldToMatch",
        /// The value that you want AWS WAF to search for. Sent base64 encoded.
        target_string / set_target_string: shape(Blob) = "TargetString",
        text_transformation / set_text_transformation: shape(TextTransformation) = "TextTransformation",
        positional_constraint / set_positional_constraint: shape(PositionalConstraint) = "PositionalConstraint",
    }
}

structure! {
    /// The rule to exclude from a rule group.
    pub struct ExcludedRule in mod excluded_rule {
        rule_id / set_rule_id: string = "RuleId",
    }
}

structure! {
    /// Specifies where in a web request to look for the filter's target.
    pub struct FieldToMatch in mod field_to_match {
        r#type / set_type: shape(MatchFieldType) = "Type",
        /// When `Type` is `HEADER`, the name of the header. When `Type` is `SINGLE_QUERY_ARG`,
        /// the name of the parameter. Not case sensitive.
        data / set_data: string = "Data",
    }
}

structure! {
    /// The country from which web requests originate that you want AWS WAF to search for.
    pub struct GeoMatchConstraint in mod geo_match_constraint {
        r#type / set_type: shape(GeoMatchConstraintType) = "Type",
        value / set_value: shape(GeoMatchConstraintValue) = "Value",
    }
}

structure! {
    /// Contains one or more countries that AWS WAF will search for.
    pub struct GeoMatchSet in mod geo_match_set {
        geo_match_set_id / set_geo_match_set_id: string = "GeoMatchSetId",
        name / set_name: string = "Name",
        geo_match_constraints / set_geo_match_constraints: list(GeoMatchConstraint) = "GeoMatchConstraints",
    }
}

structure! {
    pub struct GeoMatchSetSummary in mod geo_match_set_summary {
        geo_match_set_id / set_geo_match_set_id: string = "GeoMatchSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct GeoMatchSetUpdate in mod geo_match_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        geo_match_constraint / set_geo_match_constraint: shape(GeoMatchConstraint) = "GeoMatchConstraint",
    }
}

structure! {
    /// The response from a `GetSampledRequests` request includes an `HTTPHeader` complex type
    /// for each header in the sampled web request.
    pub struct HttpHeader in mod http_header {
        name / set_name: string = "Name",
        value / set_value: string = "Value",
    }
}

structure! {
    /// The response from a `GetSampledRequests` request includes an `HTTPRequest` complex
    /// type that appears as `Request` in the response syntax.
    pub struct HttpRequest in mod http_request {
        /// The IP address that the request originated from.
        client_ip / set_client_ip: string = "ClientIP",
        /// The two-letter country code for the country that the request originated from.
        country / set_country: string = "Country",
        /// The part of a web request that identifies the resource, for example, `/images/daily-ad.jpg`.
        uri / set_uri: string = "URI",
        /// The HTTP method specified in the sampled web request.
        method / set_method: string = "Method",
        /// The HTTP version specified in the sampled web request, for example, `HTTP/1.1`.
        http_version / set_http_version: string = "HTTPVersion",
        headers / set_headers: list(HttpHeader) = "Headers",
    }
}

structure! {
    /// Contains one or more IP addresses or blocks of IP addresses specified in Classless
    /// Inter-Domain Routing (CIDR) notation.
    pub struct IpSet in mod ip_set {
        ip_set_id / set_ip_set_id: string = "IPSetId",
        name / set_name: string = "Name",
        ip_set_descriptors / set_ip_set_descriptors: list(IpSetDescriptor) = "IPSetDescriptors",
    }
}

structure! {
    /// Specifies the IP address type (`IPV4` or `IPV6`) and the IP address range (in CIDR
    /// format) that web requests originate from.
    pub struct IpSetDescriptor in mod ip_set_descriptor {
        r#type / set_type: shape(IpSetDescriptorType) = "Type",
        /// An address or range, such as `192.0.2.44/32`.
        value / set_value: string = "Value",
    }
}

structure! {
    pub struct IpSetSummary in mod ip_set_summary {
        ip_set_id / set_ip_set_id: string = "IPSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct IpSetUpdate in mod ip_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        ip_set_descriptor / set_ip_set_descriptor: shape(IpSetDescriptor) = "IPSetDescriptor",
    }
}

structure! {
    /// The Amazon Kinesis Data Firehose, `RedactedFields` information, and the web ACL
    /// Amazon Resource Name (ARN).
    pub struct LoggingConfiguration in mod logging_configuration {
        /// The Amazon Resource Name (ARN) of the web ACL that you want to associate with
        /// `LogDestinationConfigs`.
        ///
        /// Length: 1 to 1224. Pattern: `.*\S.*`
        resource_arn / set_resource_arn: string = "ResourceArn",
        /// An array of Amazon Kinesis Data Firehose ARNs. Exactly one.
        log_destination_configs / set_log_destination_configs: list(String) = "LogDestinationConfigs",
        /// The parts of the request that you want redacted from the logs.
        redacted_fields / set_redacted_fields: list(FieldToMatch) = "RedactedFields",
    }
}

structure! {
    /// Specifies the set and the kind of condition that a `Rule` adds.
    pub struct Predicate in mod predicate {
        /// Set `Negated` to `true` to match requests that do not match the set.
        negated / set_negated: value(bool) = "Negated",
        r#type / set_type: shape(PredicateType) = "Type",
        /// A unique identifier for a predicate in a `Rule`, such as `ByteMatchSetId` or `IPSetId`.
        data_id / set_data_id: string = "DataId",
    }
}

structure! {
    /// A `RateBasedRule` is identical to a regular `Rule`, with one addition: it counts the
    /// number of requests that arrive from a specified IP address every five minutes.
    pub struct RateBasedRule in mod rate_based_rule {
        rule_id / set_rule_id: string = "RuleId",
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
        match_predicates / set_match_predicates: list(Predicate) = "MatchPredicates",
        rate_key / set_rate_key: shape(RateKey) = "RateKey",
        /// The maximum number of requests from one IP address allowed in a five-minute period.
        ///
        /// Range: 100 to 2000000000.
        rate_limit / set_rate_limit: value(i64) = "RateLimit",
    }
}

structure! {
    /// Sets of regular expression patterns and the parts of a request to apply them to.
    pub struct RegexMatchSet in mod regex_match_set {
        regex_match_set_id / set_regex_match_set_id: string = "RegexMatchSetId",
        name / set_name: string = "Name",
        regex_match_tuples / set_regex_match_tuples: list(RegexMatchTuple) = "RegexMatchTuples",
    }
}

structure! {
    pub struct RegexMatchSetSummary in mod regex_match_set_summary {
        regex_match_set_id / set_regex_match_set_id: string = "RegexMatchSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct RegexMatchSetUpdate in mod regex_match_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        regex_match_tuple / set_regex_match_tuple: shape(RegexMatchTuple) = "RegexMatchTuple",
    }
}

structure! {
    pub struct RegexMatchTuple in mod regex_match_tuple {
        field_to_match / set_field_to_match: shape(FieldToMatch) = "FieldToMatch",
        text_transformation / set_text_transformation: shape(TextTransformation) = "TextTransformation",
        regex_pattern_set_id / set_regex_pattern_set_id: string = "RegexPatternSetId",
    }
}

structure! {
    /// The regular expression patterns that you want AWS WAF to search for.
    pub struct RegexPatternSet in mod regex_pattern_set {
        regex_pattern_set_id / set_regex_pattern_set_id: string = "RegexPatternSetId",
        name / set_name: string = "Name",
        /// At most 10 patterns.
        regex_pattern_strings / set_regex_pattern_strings: list(String) = "RegexPatternStrings",
    }
}

structure! {
    pub struct RegexPatternSetSummary in mod regex_pattern_set_summary {
        regex_pattern_set_id / set_regex_pattern_set_id: string = "RegexPatternSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct RegexPatternSetUpdate in mod regex_pattern_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        /// Length: 1 to 512. Pattern: `.*`
        regex_pattern_string / set_regex_pattern_string: string = "RegexPatternString",
    }
}

structure! {
    /// A combination of `ByteMatchSet`, `IPSet` and other set objects that identify the web
    /// requests that you want to allow, block, or count.
    pub struct Rule in mod rule {
        rule_id / set_rule_id: string = "RuleId",
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
        predicates / set_predicates: list(Predicate) = "Predicates",
    }
}

structure! {
    /// A collection of predefined rules that you can add to a web ACL.
    pub struct RuleGroup in mod rule_group {
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
    }
}

structure! {
    pub struct RuleGroupSummary in mod rule_group_summary {
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct RuleGroupUpdate in mod rule_group_update {
        action / set_action: shape(ChangeAction) = "Action",
        activated_rule / set_activated_rule: shape(ActivatedRule) = "ActivatedRule",
    }
}

structure! {
    pub struct RuleSummary in mod rule_summary {
        rule_id / set_rule_id: string = "RuleId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct RuleUpdate in mod rule_update {
        action / set_action: shape(ChangeAction) = "Action",
        predicate / set_predicate: shape(Predicate) = "Predicate",
    }
}

structure! {
    /// A sampled web request and the action AWS WAF took on it.
    pub struct SampledHttpRequest in mod sampled_http_request {
        request / set_request: shape(HttpRequest) = "Request",
        /// A value that indicates how one result in the response relates proportionally to
        /// other results in the response.
        weight / set_weight: value(i64) = "Weight",
        /// The time at which AWS WAF received the request from your AWS resource.
        timestamp / set_timestamp: shape(Instant) = "Timestamp",
        /// The action for the `Rule` that the request matched: `ALLOW`, `BLOCK`, or `COUNT`.
        action / set_action: string = "Action",
        /// This value is returned if the `GetSampledRequests` request specifies the ID of a
        /// `RuleGroup` rather than the ID of an individual rule.
        rule_within_rule_group / set_rule_within_rule_group: string = "RuleWithinRuleGroup",
    }
}

structure! {
    /// Specifies a constraint on the size of a part of the web request.
    pub struct SizeConstraint in mod size_constraint {
        field_to_match / set_field_to_match: shape(FieldToMatch) = "FieldToMatch",
        text_transformation / set_text_transformation: shape(TextTransformation) = "TextTransformation",
        comparison_operator / set_comparison_operator: shape(ComparisonOperator) = "ComparisonOperator",
        /// The size in bytes that you want AWS WAF to compare against the size of the
        /// specified `FieldToMatch`.
        ///
        /// Range: 0 to 21474836480.
        size / set_size: value(i64) = "Size",
    }
}

structure! {
    pub struct SizeConstraintSet in mod size_constraint_set {
        size_constraint_set_id / set_size_constraint_set_id: string = "SizeConstraintSetId",
        name / set_name: string = "Name",
        size_constraints / set_size_constraints: list(SizeConstraint) = "SizeConstraints",
    }
}

structure! {
    pub struct SizeConstraintSetSummary in mod size_constraint_set_summary {
        size_constraint_set_id / set_size_constraint_set_id: string = "SizeConstraintSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct SizeConstraintSetUpdate in mod size_constraint_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        size_constraint / set_size_constraint: shape(SizeConstraint) = "SizeConstraint",
    }
}

structure! {
    /// The parts of web requests that you want AWS WAF to inspect for snippets of malicious
    /// SQL code.
    pub struct SqlInjectionMatchSet in mod sql_injection_match_set {
        sql_injection_match_set_id / set_sql_injection_match_set_id: string = "SqlInjectionMatchSetId",
        name / set_name: string = "Name",
        sql_injection_match_tuples / set_sql_injection_match_tuples: list(SqlInjectionMatchTuple) = "SqlInjectionMatchTuples",
    }
}

structure! {
    pub struct SqlInjectionMatchSetSummary in mod sql_injection_match_set_summary {
        sql_injection_match_set_id / set_sql_injection_match_set_id: string = "SqlInjectionMatchSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct SqlInjectionMatchSetUpdate in mod sql_injection_match_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        sql_injection_match_tuple / set_sql_injection_match_tuple: shape(SqlInjectionMatchTuple) = "SqlInjectionMatchTuple",
    }
}

structure! {
    pub struct SqlInjectionMatchTuple in mod sql_injection_match_tuple {
        field_to_match / set_field_to_match: shape(FieldToMatch) = "FieldToMatch",
        text_transformation / set_text_transformation: shape(TextTransformation) = "TextTransformation",
    }
}

structure! {
    /// A summary of the rule groups you are subscribed to.
    pub struct SubscribedRuleGroupSummary in mod subscribed_rule_group_summary {
        rule_group_id / set_rule_group_id: string = "RuleGroupId",
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
    }
}

structure! {
    /// A tag associated with an AWS resource.
    pub struct Tag in mod tag {
        /// Length: 1 to 128. Pattern: `.*\S.*`
        key / set_key: string = "Key",
        /// Length: at most 256. Pattern: `.*`
        value / set_value: string = "Value",
    }
}

structure! {
    /// Information for a tag associated with an AWS resource.
    pub struct TagInfoForResource in mod tag_info_for_resource {
        resource_arn / set_resource_arn: string = "ResourceARN",
        tag_list / set_tag_list: list(Tag) = "TagList",
    }
}

structure! {
    /// The start and end times of the sample of web requests returned by `GetSampledRequests`.
    pub struct TimeWindow in mod time_window {
        start_time / set_start_time: shape(Instant) = "StartTime",
        end_time / set_end_time: shape(Instant) = "EndTime",
    }
}

structure! {
    /// What AWS WAF does with a request that matches a `Rule`.
    pub struct WafAction in mod waf_action {
        r#type / set_type: shape(WafActionType) = "Type",
    }
}

structure! {
    /// The action to take if any rule within the `RuleGroup` matches a request.
    pub struct WafOverrideAction in mod waf_override_action {
        r#type / set_type: shape(WafOverrideActionType) = "Type",
    }
}

structure! {
    /// Contains the `Rules` that identify the requests that you want to allow, block, or
    /// count.
    pub struct WebAcl in mod web_acl {
        web_acl_id / set_web_acl_id: string = "WebACLId",
        name / set_name: string = "Name",
        metric_name / set_metric_name: string = "MetricName",
        /// The action to perform if none of the `Rules` contained in the `WebACL` match.
        default_action / set_default_action: shape(WafAction) = "DefaultAction",
        rules / set_rules: list(ActivatedRule) = "Rules",
        /// Tha Amazon Resource Name (ARN) of the web ACL.
        web_acl_arn / set_web_acl_arn: string = "WebACLArn",
    }
}

structure! {
    pub struct WebAclSummary in mod web_acl_summary {
        web_acl_id / set_web_acl_id: string = "WebACLId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct WebAclUpdate in mod web_acl_update {
        action / set_action: shape(ChangeAction) = "Action",
        activated_rule / set_activated_rule: shape(ActivatedRule) = "ActivatedRule",
    }
}

structure! {
    /// The parts of web requests that you want AWS WAF to inspect for cross-site scripting attacks.
    pub struct XssMatchSet in mod xss_match_set {
        xss_match_set_id / set_xss_match_set_id: string = "XssMatchSetId",
        name / set_name: string = "Name",
        xss_match_tuples / set_xss_match_tuples: list(XssMatchTuple) = "XssMatchTuples",
    }
}

structure! {
    pub struct XssMatchSetSummary in mod xss_match_set_summary {
        xss_match_set_id / set_xss_match_set_id: string = "XssMatchSetId",
        name / set_name: string = "Name",
    }
}

structure! {
    pub struct XssMatchSetUpdate in mod xss_match_set_update {
        action / set_action: shape(ChangeAction) = "Action",
        xss_match_tuple / set_xss_match_tuple: shape(XssMatchTuple) = "XssMatchTuple",
    }
}

structure! {
    pub struct XssMatchTuple in mod xss_match_tuple {
        field_to_match / set_field_to_match: shape(FieldToMatch) = "FieldToMatch",
        text_transformation / set_text_transformation: shape(TextTransformation) = "TextTransformation",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn predicate_types_keep_mixed_case_wire_values() {
        assert_eq!(PredicateType::IpMatch.as_str(), "IPMatch");
        assert_eq!(
            PredicateType::from_value("IPMatch").unwrap(),
            PredicateType::IpMatch
        );
        assert!(PredicateType::from_value("IPMATCH").is_err());
        assert_eq!(GeoMatchConstraintType::Country.as_str(), "Country");
    }

    #[test]
    fn byte_match_tuple_target_is_base64_on_the_wire() {
        let tuple = ByteMatchTuple::builder()
            .field_to_match(
                FieldToMatch::builder()
                    .r#type(MatchFieldType::Header)
                    .data("User-Agent")
                    .build(),
            )
            .target_string(Blob::new("badbot"))
            .text_transformation(TextTransformation::Lowercase)
            .positional_constraint(PositionalConstraint::Contains)
            .build();
        let json = serde_json::to_value(&tuple).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "FieldToMatch": {"Type": "HEADER", "Data": "User-Agent"},
                "TargetString": "YmFkYm90",
                "TextTransformation": "LOWERCASE",
                "PositionalConstraint": "CONTAINS"
            })
        );
        let parsed: ByteMatchTuple = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tuple);
    }

    #[test]
    fn rate_based_rule_display() {
        let rule = RateBasedRule::builder()
            .rule_id("r-1")
            .match_predicates(
                Predicate::builder()
                    .negated(false)
                    .r#type(PredicateType::IpMatch)
                    .data_id("ips-1")
                    .build(),
            )
            .rate_key(RateKey::Ip)
            .rate_limit(2000)
            .build();
        assert_eq!(
            rule.to_string(),
            "{RuleId: r-1,MatchPredicates: [{Negated: false,Type: IPMatch,DataId: ips-1}],RateKey: IP,RateLimit: 2000}"
        );
    }
}
