//! Generated-content registry for special files.
//!
//! Each special file is described exactly once by a [`ContentRule`] in
//! [`CONTENT_REGISTRY`]. A rule is keyed by file name plus an optional
//! project type; type-specific rules win over generic ones. Any file without
//! a rule is written empty.
//!
//! # Adding a Special File
//!
//! 1. Write a generator `fn(&ContentContext) -> String`
//! 2. Add one [`ContentRule`] entry to [`CONTENT_REGISTRY`]
//! 3. Nothing else changes

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::value_objects::ProjectType;

/// Everything a generator may reference.
#[derive(Debug, Clone, Copy)]
pub struct ContentContext<'a> {
    pub project_name: &'a str,
    pub project_type: ProjectType,
}

impl<'a> ContentContext<'a> {
    pub fn new(project_name: &'a str, project_type: ProjectType) -> Self {
        Self {
            project_name,
            project_type,
        }
    }
}

/// Content generator for one special file.
pub type Generator = fn(&ContentContext<'_>) -> String;

/// Registry entry: which file, for which type, produced by which generator.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    pub file_name: &'static str,
    /// `None` applies to every project type.
    pub project_type: Option<ProjectType>,
    pub generate: Generator,
}

/// Single source of truth for the built-in special files.
pub static CONTENT_REGISTRY: &[ContentRule] = &[
    ContentRule {
        file_name: "index.html",
        project_type: None,
        generate: index_html,
    },
    ContentRule {
        file_name: "README.md",
        project_type: None,
        generate: readme,
    },
    ContentRule {
        file_name: "project.godot",
        project_type: Some(ProjectType::Godot),
        generate: project_godot,
    },
    ContentRule {
        file_name: ".gitignore",
        project_type: Some(ProjectType::Godot),
        generate: gitignore_godot,
    },
    ContentRule {
        file_name: ".gitattributes",
        project_type: Some(ProjectType::Godot),
        generate: gitattributes_godot,
    },
    ContentRule {
        file_name: ".gitignore",
        project_type: Some(ProjectType::Unity),
        generate: gitignore_unity,
    },
    ContentRule {
        file_name: ".gitignore",
        project_type: Some(ProjectType::NodeJs),
        generate: gitignore_nodejs,
    },
    ContentRule {
        file_name: "package.json",
        project_type: Some(ProjectType::NodeJs),
        generate: package_json,
    },
];

/// Lookup table from file name, then type, to generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratedContent {
    rules: HashMap<&'static str, HashMap<Option<ProjectType>, Generator>>,
}

impl GeneratedContent {
    /// An empty table; every file renders empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table built from [`CONTENT_REGISTRY`].
    pub fn builtin() -> Self {
        CONTENT_REGISTRY
            .iter()
            .fold(Self::new(), |table, rule| table.with_rule(*rule))
    }

    /// Add or replace a rule.
    pub fn register(&mut self, rule: ContentRule) {
        self.rules
            .entry(rule.file_name)
            .or_default()
            .insert(rule.project_type, rule.generate);
    }

    pub fn with_rule(mut self, rule: ContentRule) -> Self {
        self.register(rule);
        self
    }

    /// Find the generator for a file name, preferring a type-specific rule.
    pub fn lookup(&self, file_name: &str, project_type: ProjectType) -> Option<Generator> {
        let by_type = self.rules.get(file_name)?;
        by_type
            .get(&Some(project_type))
            .or_else(|| by_type.get(&None))
            .copied()
    }

    /// Content for `file_name`, or an empty string when no rule applies.
    pub fn generate(&self, file_name: &str, ctx: &ContentContext<'_>) -> String {
        self.lookup(file_name, ctx.project_type)
            .map(|generate| generate(ctx))
            .unwrap_or_default()
    }

    pub fn is_special(&self, file_name: &str, project_type: ProjectType) -> bool {
        self.lookup(file_name, project_type).is_some()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

fn index_html(ctx: &ContentContext<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name}</title>
    <link rel="stylesheet" href="style.css">
    <script src="script.js" defer></script>
</head>
<body>

</body>
</html>
"#,
        name = html_text(ctx.project_name)
    )
}

fn readme(ctx: &ContentContext<'_>) -> String {
    format!("{} - {} Project", ctx.project_name, ctx.project_type.label())
}

fn project_godot(ctx: &ContentContext<'_>) -> String {
    format!(
        r#"config_version=5

[application]

config/name="{name}"
config/features=PackedStringArray("4.3", "Forward Plus")

[rendering]

renderer/rendering_method="forward_plus"
"#,
        name = godot_string(ctx.project_name)
    )
}

fn gitignore_godot(_: &ContentContext<'_>) -> String {
    "# Godot 4+ specific ignores
.godot/
.import/

# Godot-specific ignores
export.cfg
export_presets.cfg

# Android build output
/android/
"
    .into()
}

fn gitattributes_godot(_: &ContentContext<'_>) -> String {
    "# Normalize EOL for all text files.\n* text=auto eol=lf\n".into()
}

fn gitignore_unity(_: &ContentContext<'_>) -> String {
    "/[Ll]ibrary/
/[Tt]emp/
/[Oo]bj/
/[Bb]uild/
/[Bb]uilds/
/[Ll]ogs/
/[Uu]ser[Ss]ettings/

# IDE and generated project files
.vs/
.idea/
.vscode/
*.csproj
*.unityproj
*.sln
*.suo
*.tmp
*.user
*.userprefs
*.pidb
*.booproj
"
    .into()
}

fn gitignore_nodejs(_: &ContentContext<'_>) -> String {
    "node_modules/
dist/
coverage/
.env
npm-debug.log*
"
    .into()
}

#[derive(Serialize)]
struct PackageManifest<'a> {
    name: String,
    version: &'a str,
    description: String,
    main: &'a str,
    scripts: PackageScripts<'a>,
    license: &'a str,
}

#[derive(Serialize)]
struct PackageScripts<'a> {
    start: &'a str,
}

fn package_json(ctx: &ContentContext<'_>) -> String {
    let manifest = PackageManifest {
        name: ctx
            .project_name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-"),
        version: "0.1.0",
        description: format!("{} - {} Project", ctx.project_name, ctx.project_type.label()),
        main: "src/index.js",
        scripts: PackageScripts {
            start: "node src/index.js",
        },
        license: "MIT",
    };

    // A struct of plain strings always serializes.
    serde_json::to_string_pretty(&manifest)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .unwrap_or_default()
}

/// Quote-safe form for a Godot `"..."` literal.
fn godot_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

fn html_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(file: &str, name: &str, ty: ProjectType) -> String {
        GeneratedContent::builtin().generate(file, &ContentContext::new(name, ty))
    }

    #[test]
    fn index_html_embeds_title_and_assets() {
        let html = generate("index.html", "Demo", ProjectType::Web);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Demo</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
        assert!(html.contains(r#"<script src="script.js" defer></script>"#));
    }

    #[test]
    fn readme_is_single_line() {
        assert_eq!(
            generate("README.md", "Demo", ProjectType::Web),
            "Demo - Web Project"
        );
        assert_eq!(
            generate("README.md", "Foo", ProjectType::Godot),
            "Foo - Godot Project"
        );
    }

    #[test]
    fn project_godot_sets_name_features_and_renderer() {
        let text = generate("project.godot", "Foo", ProjectType::Godot);
        assert!(text.contains("config/name=\"Foo\""));
        assert!(text.contains("config/features=PackedStringArray("));
        assert!(text.contains("renderer/rendering_method="));
    }

    #[test]
    fn gitignore_is_type_specific() {
        let godot = generate(".gitignore", "Foo", ProjectType::Godot);
        let unity = generate(".gitignore", "Foo", ProjectType::Unity);

        assert!(godot.contains(".godot/"));
        assert!(godot.contains("/android/"));
        assert!(unity.contains("/[Ll]ibrary/"));
        assert!(unity.contains("*.csproj"));
        assert_ne!(godot, unity);
    }

    #[test]
    fn gitignore_for_web_is_empty() {
        assert!(generate(".gitignore", "Foo", ProjectType::Web).is_empty());
    }

    #[test]
    fn gitattributes_normalizes_line_endings() {
        assert!(generate(".gitattributes", "Foo", ProjectType::Godot).contains("text=auto"));
    }

    #[test]
    fn project_godot_only_applies_to_godot() {
        assert!(generate("project.godot", "Foo", ProjectType::Unity).is_empty());
    }

    #[test]
    fn package_json_uses_kebab_lowercase_name() {
        let json = generate("package.json", "My App", ProjectType::NodeJs);
        assert!(json.contains(r#""name": "my-app""#));
        assert!(json.contains(r#""main": "src/index.js""#));
    }

    #[test]
    fn quoted_names_keep_package_json_valid() {
        let json = generate("package.json", r#"My "App""#, ProjectType::NodeJs);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], r#"my-"app""#);
        assert_eq!(value["description"], r#"My "App" - Node.js Project"#);
        assert_eq!(value["scripts"]["start"], "node src/index.js");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn quoted_names_are_escaped_for_godot() {
        let text = generate("project.godot", r#"Say "Hi"\Bye"#, ProjectType::Godot);
        assert!(text.contains(r#"config/name="Say \"Hi\"\\Bye""#));
    }

    #[test]
    fn markup_in_names_is_escaped_in_html() {
        let html = generate("index.html", "A<b>&C", ProjectType::Web);
        assert!(html.contains("<title>A&lt;b&gt;&amp;C</title>"));
    }

    #[test]
    fn unknown_files_are_empty() {
        assert!(generate("style.css", "Demo", ProjectType::Web).is_empty());
        assert!(generate("script.js", "Demo", ProjectType::Web).is_empty());
    }

    #[test]
    fn registered_rule_overrides_builtin() {
        fn custom(_: &ContentContext<'_>) -> String {
            "custom".into()
        }

        let table = GeneratedContent::builtin().with_rule(ContentRule {
            file_name: "README.md",
            project_type: Some(ProjectType::Web),
            generate: custom,
        });

        let ctx = ContentContext::new("Demo", ProjectType::Web);
        assert_eq!(table.generate("README.md", &ctx), "custom");

        let other = ContentContext::new("Demo", ProjectType::Unity);
        assert_eq!(table.generate("README.md", &other), "Demo - Unity Project");
    }
}
