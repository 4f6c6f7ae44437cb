/// Rewrites a statement so literal double quotes survive the HTTP driver's
/// parameter binding.
///
/// Statements containing both quote kinds get every `"` escaped to `\"` and
/// every `:` escaped to `\:` (a bare colon would otherwise be read as a bind
/// marker). Statements with only double quotes have them swapped for single
/// quotes. Anything else passes through untouched.
///
/// Known limitation: this is a textual heuristic, not a SQL parser. It can
/// misfire on statements that already carry escaped quotes, or on colons
/// inside string literals that should stay bare.
pub fn escape_statement(sql: &str) -> String {
    if !sql.contains('"') {
        return sql.to_string();
    }
    if sql.contains('\'') {
        //  "  ->  \"     :  ->  \:
        return sql.replace('"', "\\\"").replace(':', "\\:");
    }
    sql.replace('"', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_double_quote_passes_through() {
        let sql = "select number from numbers(10) where number > 3";
        assert_eq!(escape_statement(sql), sql);
    }

    #[test]
    fn test_single_quotes_only_pass_through() {
        let sql = "select 'a:b' from t1";
        assert_eq!(escape_statement(sql), sql);
    }

    #[test]
    fn test_double_quotes_become_single_quotes() {
        assert_eq!(
            escape_statement(r#"select "false"::boolean = not "true"::boolean;"#),
            "select 'false'::boolean = not 'true'::boolean;"
        );
    }

    #[test]
    fn test_both_quote_kinds_escape_quotes_and_colons() {
        assert_eq!(
            escape_statement(r#"SELECT parse_json('"false"')::boolean;"#),
            r#"SELECT parse_json('\"false\"')\:\:boolean;"#
        );
    }

    #[test]
    fn test_colon_inside_literal_is_escaped_too() {
        assert_eq!(
            escape_statement(r#"select as_object(parse_json('{"a":"b"}'));"#),
            r#"select as_object(parse_json('{\"a\"\:\"b\"}'));"#
        );
    }

    #[test]
    fn test_only_quotes_and_colons_change() {
        let sql = r#"select get_path(parse_json('{"k":{"v":1}}'), 'k.v')"#;
        let rewritten = escape_statement(sql);
        let stripped: String = rewritten.replace("\\\"", "\"").replace("\\:", ":");
        assert_eq!(stripped, sql);
    }
}
