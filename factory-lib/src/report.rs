use itertools::Itertools as _;

use crate::{
    entities::{AssemblerType, Component, Rate, Recipe, Resource},
    traits::{PrettyString, INDENT},
};

/// Render a rate. Unless `exact`, the value is rounded up so that requirements are never
/// under-reported. Exact values use the shortest text that parses back to the same float,
/// which switches to scientific notation for very large or small magnitudes (`1e16`).
pub fn format_number(number: Rate, exact: bool) -> String {
    if exact {
        format!("{number:?}")
    } else {
        // Adding zero turns a negative zero from `ceil` into a plain zero.
        format!("{:.0}", number.ceil() + 0.0)
    }
}

/// Requirement for a raw resource.
#[derive(Debug, Clone, PartialEq)]
pub struct OreReportPart {
    pub resource: Resource,
    pub number: Rate,
    pub exact: bool,
}

impl OreReportPart {
    pub fn new(resource: Resource, number: Rate, exact: bool) -> Self {
        Self {
            resource,
            number,
            exact,
        }
    }
}

impl PrettyString for OreReportPart {
    fn pretty_string(&self) -> String {
        format!(
            "Resource: {}\n{INDENT}Number: {}",
            self.resource,
            format_number(self.number, self.exact)
        )
    }
}

/// Requirement for a crafted component together with the machines that make it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReportPart {
    pub component: Component,
    pub number: Rate,
    pub manufacturers: u32,
    pub manufacturer_type: AssemblerType,
    pub exact: bool,
}

impl ItemReportPart {
    pub fn new(
        component: Component,
        number: Rate,
        manufacturers: u32,
        manufacturer_type: AssemblerType,
        exact: bool,
    ) -> Self {
        Self {
            component,
            number,
            manufacturers,
            manufacturer_type,
            exact,
        }
    }

    /// Report line for running `recipe` at `per_minute` output, with enough machines to keep
    /// up. Returns `None` when the recipe does not produce a component.
    pub fn for_rate(recipe: &Recipe, per_minute: Rate, exact: bool) -> Option<Self> {
        let component = recipe.output().item.as_component()?;
        let machines = (per_minute / recipe.in_minute().number).ceil().max(0.0);

        Some(Self::new(
            component,
            per_minute,
            machines as u32,
            recipe.assembler(),
            exact,
        ))
    }
}

impl PrettyString for ItemReportPart {
    fn pretty_string(&self) -> String {
        format!(
            "Component: {}\n{INDENT}Number: {}\n{INDENT}{}: {}",
            self.component,
            format_number(self.number, self.exact),
            self.manufacturer_type,
            self.manufacturers
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportPart {
    Ore(OreReportPart),
    Item(ItemReportPart),
}

impl From<OreReportPart> for ReportPart {
    fn from(part: OreReportPart) -> Self {
        ReportPart::Ore(part)
    }
}

impl From<ItemReportPart> for ReportPart {
    fn from(part: ItemReportPart) -> Self {
        ReportPart::Item(part)
    }
}

impl PrettyString for ReportPart {
    fn pretty_string(&self) -> String {
        match self {
            ReportPart::Ore(part) => part.pretty_string(),
            ReportPart::Item(part) => part.pretty_string(),
        }
    }
}

/// Ordered list of report parts. Rendering keeps the order the parts were given in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    parts: Vec<ReportPart>,
}

impl Report {
    pub fn new(parts: Vec<ReportPart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[ReportPart] {
        &self.parts
    }

    pub fn push(&mut self, part: impl Into<ReportPart>) {
        self.parts.push(part.into());
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromIterator<ReportPart> for Report {
    fn from_iter<I: IntoIterator<Item = ReportPart>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PrettyString for Report {
    fn pretty_string(&self) -> String {
        self.parts
            .iter()
            .map(PrettyString::pretty_string)
            .join("\n\n")
    }
}
