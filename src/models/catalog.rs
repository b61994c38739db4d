use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChecksheetCategory {
    #[serde(rename = "ECM")]
    Ecm,
    #[serde(rename = "HVAC")]
    Hvac,
    Fixture,
    Mould,
}

impl ChecksheetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecm => "ECM",
            Self::Hvac => "HVAC",
            Self::Fixture => "Fixture",
            Self::Mould => "Mould",
        }
    }
}

/// A checksheet template: a named, ordered list of inspection steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checksheet {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ChecksheetCategory,
    pub tasks: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mould {
    pub model: &'static str,
    pub mould_no: Option<&'static str>,
    pub mould_id_no: &'static str,
    pub part_name: Option<&'static str>,
}

impl Mould {
    /// Name copied onto a PM task: part name, else model, else the id.
    pub fn display_name(&self) -> &'static str {
        self.part_name
            .filter(|s| !s.is_empty())
            .or(Some(self.model).filter(|s| !s.is_empty()))
            .unwrap_or(self.mould_id_no)
    }
}
