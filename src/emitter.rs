use crate::ast::DeviceToken;

const RULE_INDENT: &str = "  ";
const DECLARATION_INDENT: &str = "    ";

/// Render device tokens as class-scoped `@media` blocks
///
/// Blocks follow token order and are separated by one blank line.
pub fn emit(tokens: &[DeviceToken]) -> String {
    tokens
        .iter()
        .map(emit_device)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite one fragment into its `@media` block
///
/// The rewrite is line based and only knows one level of rule nesting: a line ending
/// in `{` opens a rule, a lone `}` closes it, anything else is a declaration.
pub fn emit_device(token: &DeviceToken) -> String {
    let class = token.class_name();
    let mut css = format!(
        "@media (width: {}) and (height: {}) {{\n",
        token.width, token.height
    );

    for line in token.body.lines() {
        let line = line.trim();
        if let Some(selector) = line.strip_suffix('{') {
            css.push_str(&format!("{RULE_INDENT}.{class} {} {{\n", selector.trim_end()));
        } else if line == "}" {
            css.push_str(RULE_INDENT);
            css.push_str("}\n");
        } else {
            css.push_str(&format!("{DECLARATION_INDENT}{line}\n"));
        }
    }
    css.push_str("}\n");
    css
}
