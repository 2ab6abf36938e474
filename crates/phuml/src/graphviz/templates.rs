//! DOT templates

use minijinja::{AutoEscape, Environment};

use crate::core::Result;

pub(crate) const DIGRAPH: &str = "digraph.dot";
pub(crate) const LABEL: &str = "label.dot";

const DIGRAPH_TEMPLATE: &str = r#"digraph "{{ name }}" {
  graph [splines=true overlap=false mindist=0.6 fontname="{{ theme.font }}"];
  node [shape=plaintext fontname="{{ theme.font }}" fontsize=10];
  edge [color="{{ theme.edge }}" fontname="{{ theme.font }}" fontsize=10];
{% for node in nodes %}
  {{ node.id }} [label=<{{ node.label }}>]
{% endfor %}
{% for edge in edges %}
  {{ edge.source }} -> {{ edge.target }} [{{ edge.attributes }}]
{% endfor %}
}
"#;

// Labels are a single line so they can sit inside one node statement.
const LABEL_TEMPLATE: &str = concat!(
    r#"{% macro member(m) %}"#,
    r#"{% if m.is_static %}<u>{% endif %}{% if m.is_abstract %}<i>{% endif %}"#,
    r#"{{ m.text|e }}"#,
    r#"{% if m.is_abstract %}</i>{% endif %}{% if m.is_static %}</u>{% endif %}"#,
    r#"<br align="left"/>"#,
    r#"{% endmacro %}"#,
    r#"<table border="0" cellborder="1" cellspacing="0" cellpadding="4" color="{{ theme.border }}">"#,
    r#"<tr><td bgcolor="{{ theme.name_background }}"><font color="{{ theme.name_font }}">"#,
    r#"{% if is_interface %}&laquo;interface&raquo;<br/>{% endif %}"#,
    r#"{% if is_abstract %}<i>{{ name|e }}</i>{% else %}<b>{{ name|e }}</b>{% endif %}"#,
    r#"</font></td></tr>"#,
    r#"{% if attributes is not none %}"#,
    r#"<tr><td bgcolor="{{ theme.attributes_background }}" align="left" balign="left">"#,
    r#"{% if attributes %}<font color="{{ theme.member_font }}">"#,
    r#"{% for m in attributes %}{{ member(m) }}{% endfor %}"#,
    r#"</font>{% endif %}</td></tr>"#,
    r#"{% endif %}"#,
    r#"{% if methods is not none %}"#,
    r#"<tr><td bgcolor="{{ theme.methods_background }}" align="left" balign="left">"#,
    r#"{% if methods %}<font color="{{ theme.member_font }}">"#,
    r#"{% for m in methods %}{{ member(m) }}{% endfor %}"#,
    r#"</font>{% endif %}</td></tr>"#,
    r#"{% endif %}"#,
    r#"</table>"#,
);

/// Environment holding the digraph and label templates
pub(crate) fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(DIGRAPH, DIGRAPH_TEMPLATE)?;
    env.add_template(LABEL, LABEL_TEMPLATE)?;
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_templates_compile() {
        let env = environment().unwrap();
        assert!(env.get_template(DIGRAPH).is_ok());
        assert!(env.get_template(LABEL).is_ok());
    }

    #[test]
    fn test_empty_digraph() {
        let env = environment().unwrap();
        let output = env
            .get_template(DIGRAPH)
            .unwrap()
            .render(context! {
                name => "phUML",
                theme => context! { font => "Helvetica", edge => "#000000" },
                nodes => Vec::<String>::new(),
                edges => Vec::<String>::new(),
            })
            .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "digraph \"phUML\" {");
        assert_eq!(lines[4], "}");
        assert!(output.ends_with("}\n"));
    }
}
