use itertools::Itertools as _;

use crate::entities::{AssemblerType, Item, Recipe};

pub const INDENT: &str = "    ";

/// Human readable, multi-line rendering. Meant for display only, never parsed back.
pub trait PrettyString {
    fn pretty_string(&self) -> String;
}

/// Recipes are separated by a single newline, in list order.
impl PrettyString for [Recipe] {
    fn pretty_string(&self) -> String {
        self.iter().map(PrettyString::pretty_string).join("\n")
    }
}

impl PrettyString for Vec<Recipe> {
    fn pretty_string(&self) -> String {
        self.as_slice().pretty_string()
    }
}

/// Read access to a catalog of recipes.
pub trait DataSource {
    fn iter_recipes(&self) -> impl Iterator<Item = &Recipe>;

    fn try_get_recipe(&self, output: impl Into<Item>) -> Option<&Recipe> {
        let output = output.into();
        self.iter_recipes().find(|recipe| recipe.output().item == output)
    }

    fn get_recipe(&self, output: impl Into<Item>) -> &Recipe {
        let output = output.into();
        self.try_get_recipe(output)
            .unwrap_or_else(|| panic!("Recipe for {output} not found"))
    }

    fn recipes_for_assembler(&self, assembler: AssemblerType) -> Vec<&Recipe> {
        self.iter_recipes()
            .filter(|recipe| recipe.assembler() == assembler)
            .collect()
    }

    /// All recipes that take `input` as one of their ingredients.
    fn recipes_consuming(&self, input: impl Into<Item>) -> Vec<&Recipe> {
        let input = input.into();
        self.iter_recipes()
            .filter(|recipe| recipe.inputs().iter().any(|entry| entry.item == input))
            .collect()
    }
}
