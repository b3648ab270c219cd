//! Builder for settings-file fixtures.

/// Namespace written by the Visual Studio settings designer.
pub const SETTINGS_NAMESPACE: &str =
    "http://schemas.microsoft.com/VisualStudio/2004/01/settings";

#[derive(Debug, Clone)]
struct SettingFixture {
    name: Option<String>,
    values: Vec<(Option<String>, String)>,
}

/// Settings document assembled setting by setting.
///
/// # Examples
///
/// ```
/// use ortho_config_xml_test_helpers::settings::SettingsDocument;
///
/// let xml = SettingsDocument::new()
///     .setting("Foo", &[("(Default)", "Joe")])
///     .render();
/// assert!(xml.contains(r#"<Setting Name="Foo""#));
/// ```
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    namespace: Option<String>,
    settings: Vec<SettingFixture>,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDocument {
    /// Empty document in [`SETTINGS_NAMESPACE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: Some(SETTINGS_NAMESPACE.to_owned()),
            settings: Vec::new(),
        }
    }

    /// The `Bob`/`Foo` document used throughout the test suites.
    #[must_use]
    pub fn bob_and_foo() -> Self {
        Self::new()
            .setting("Bob", &[("(Default)", "John"), ("AnotherProfile", "Johanna")])
            .setting("Foo", &[("(Default)", "Joe")])
    }

    /// Use `namespace` for the root element, or none at all.
    #[must_use]
    pub fn namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(str::to_owned);
        self
    }

    /// Add a named setting with `(profile, text)` values.
    #[must_use]
    pub fn setting(self, name: &str, values: &[(&str, &str)]) -> Self {
        let entries = values
            .iter()
            .map(|(profile, text)| (Some(*profile), *text))
            .collect::<Vec<_>>();
        self.raw_setting(Some(name), &entries)
    }

    /// Add a setting whose name and profiles may be absent.
    #[must_use]
    pub fn raw_setting(mut self, name: Option<&str>, values: &[(Option<&str>, &str)]) -> Self {
        self.settings.push(SettingFixture {
            name: name.map(str::to_owned),
            values: values
                .iter()
                .map(|(profile, text)| (profile.map(str::to_owned), (*text).to_owned()))
                .collect(),
        });
        self
    }

    /// Render the document as XML text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<SettingsFile");
        if let Some(ns) = &self.namespace {
            out.push_str(&format!(" xmlns=\"{}\"", escape(ns)));
        }
        out.push_str(" CurrentProfile=\"(Default)\">\n  <Settings>\n");
        for setting in &self.settings {
            out.push_str("    <Setting");
            if let Some(name) = &setting.name {
                out.push_str(&format!(" Name=\"{}\"", escape(name)));
            }
            out.push_str(" Type=\"System.String\" Scope=\"User\">\n");
            for (profile, text) in &setting.values {
                out.push_str("      <Value");
                if let Some(profile) = profile {
                    out.push_str(&format!(" Profile=\"{}\"", escape(profile)));
                }
                out.push_str(&format!(">{}</Value>\n", escape(text)));
            }
            out.push_str("    </Setting>\n");
        }
        out.push_str("  </Settings>\n</SettingsFile>\n");
        out
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
