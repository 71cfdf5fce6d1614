use crate::{
    entities::{AssemblerType, Component, Item, ItemAmount, Recipe, RecipeItem, Resource, Seconds},
    error::FactoryResult,
    traits,
};
use tracing::debug;

/// In-memory recipe catalog.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub recipes: Vec<Recipe>,
}

impl traits::DataSource for DataSet {
    fn iter_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }
}

impl DataSet {
    /// Default recipes for the common production chains, from ingots up to computers.
    pub fn standard() -> FactoryResult<Self> {
        use AssemblerType::{Foundry, OilRefinery, Smelter};
        use Component::*;
        use Resource::*;

        let recipes = vec![
            recipe((IronIngot, 1), 2, &[(IronOre.into(), 1)], Some(Smelter))?,
            recipe((CopperIngot, 1), 2, &[(CopperOre.into(), 1)], Some(Smelter))?,
            recipe((CateriumIngot, 1), 4, &[(CateriumOre.into(), 3)], Some(Smelter))?,
            recipe(
                (SteelIngot, 3),
                4,
                &[(IronOre.into(), 3), (Coal.into(), 3)],
                Some(Foundry),
            )?,
            recipe((Plastic, 2), 6, &[(CrudeOil.into(), 3)], Some(OilRefinery))?,
            recipe((Rubber, 2), 6, &[(CrudeOil.into(), 3)], Some(OilRefinery))?,
            recipe((Fuel, 4), 6, &[(CrudeOil.into(), 6)], Some(OilRefinery))?,
            recipe((IronPlate, 2), 6, &[(IronIngot.into(), 3)], None)?,
            recipe((IronRod, 1), 4, &[(IronIngot.into(), 1)], None)?,
            recipe((Wire, 2), 4, &[(CopperIngot.into(), 1)], None)?,
            recipe((Cable, 1), 2, &[(Wire.into(), 2)], None)?,
            recipe((Concrete, 1), 4, &[(Limestone.into(), 3)], None)?,
            recipe((Screw, 4), 6, &[(IronRod.into(), 1)], None)?,
            recipe((Quickwire, 5), 5, &[(CateriumIngot.into(), 1)], None)?,
            recipe((SteelBeam, 1), 4, &[(SteelIngot.into(), 4)], None)?,
            recipe((SteelPipe, 2), 6, &[(SteelIngot.into(), 3)], None)?,
            recipe(
                (ReinforcedIronPlate, 1),
                12,
                &[(IronPlate.into(), 6), (Screw.into(), 12)],
                None,
            )?,
            recipe(
                (Rotor, 1),
                15,
                &[(IronRod.into(), 5), (Screw.into(), 25)],
                None,
            )?,
            recipe(
                (ModularFrame, 2),
                60,
                &[(ReinforcedIronPlate.into(), 3), (IronRod.into(), 12)],
                None,
            )?,
            recipe(
                (EncasedIndustrialBeam, 1),
                10,
                &[(SteelBeam.into(), 4), (Concrete.into(), 5)],
                None,
            )?,
            recipe(
                (Stator, 1),
                12,
                &[(SteelPipe.into(), 3), (Wire.into(), 8)],
                None,
            )?,
            recipe(
                (Motor, 1),
                12,
                &[(Rotor.into(), 2), (Stator.into(), 2)],
                None,
            )?,
            recipe(
                (CircuitBoard, 1),
                8,
                &[(Wire.into(), 4), (Plastic.into(), 2)],
                None,
            )?,
            recipe(
                (HeavyModularFrame, 1),
                30,
                &[
                    (ModularFrame.into(), 5),
                    (SteelPipe.into(), 15),
                    (EncasedIndustrialBeam.into(), 5),
                    (Screw.into(), 100),
                ],
                None,
            )?,
            recipe(
                (Computer, 1),
                24,
                &[
                    (CircuitBoard.into(), 10),
                    (Cable.into(), 9),
                    (Plastic.into(), 18),
                    (Screw.into(), 52),
                ],
                None,
            )?,
            recipe(
                (HighSpeedConnector, 1),
                16,
                &[
                    (Quickwire.into(), 56),
                    (Cable.into(), 10),
                    (CircuitBoard.into(), 1),
                ],
                None,
            )?,
        ];

        debug!(recipes = recipes.len(), "built standard recipe catalog");

        Ok(Self { recipes })
    }

    /// Sorts the recipes by the declaration order of their output items.
    pub fn sorted_by_output(mut self) -> Self {
        self.recipes
            .sort_by(|recipe1, recipe2| recipe1.output().item.cmp(&recipe2.output().item));

        self
    }
}

fn recipe(
    (output, amount): (Component, ItemAmount),
    time: Seconds,
    inputs: &[(Item, ItemAmount)],
    assembler: Option<AssemblerType>,
) -> FactoryResult<Recipe> {
    Recipe::new(
        RecipeItem::new(output, amount),
        time,
        inputs
            .iter()
            .map(|(item, number)| RecipeItem::new(*item, *number))
            .collect(),
        assembler,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DataSource as _;

    #[test]
    fn standard_catalog_builds() {
        let data = DataSet::standard().unwrap();

        assert!(!data.recipes.is_empty());
        assert!(data
            .iter_recipes()
            .all(|recipe| recipe.output().item.is_component()));
    }

    #[test]
    fn lookup_by_output() {
        let data = DataSet::standard().unwrap();

        let screw = data.get_recipe(Component::Screw);
        assert_eq!(screw.assembler(), AssemblerType::Constructor);
        assert_eq!(screw.in_minute().number, 40.0);
        assert!(data.try_get_recipe(Component::Supercomputer).is_none());
        assert!(data.try_get_recipe(Resource::IronOre).is_none());
    }

    #[test]
    #[should_panic(expected = "Recipe for AILimiter not found")]
    fn get_recipe_panics_on_missing_output() {
        let data = DataSet::standard().unwrap();

        data.get_recipe(Component::AILimiter);
    }

    #[test]
    fn ambiguous_machines_are_explicit() {
        let data = DataSet::standard().unwrap();

        assert_eq!(
            data.get_recipe(Component::SteelIngot).assembler(),
            AssemblerType::Foundry
        );
        assert_eq!(data.recipes_for_assembler(AssemblerType::Smelter).len(), 3);
        assert_eq!(data.recipes_for_assembler(AssemblerType::OilRefinery).len(), 3);
        assert_eq!(
            data.get_recipe(Component::Computer).assembler(),
            AssemblerType::Manufacturer
        );
    }

    #[test]
    fn recipes_consuming_an_input() {
        let data = DataSet::standard().unwrap();

        let outputs: Vec<Item> = data
            .recipes_consuming(Resource::CrudeOil)
            .into_iter()
            .map(|recipe| recipe.output().item)
            .collect();

        assert_eq!(
            outputs,
            vec![
                Component::Plastic.into(),
                Component::Rubber.into(),
                Component::Fuel.into()
            ]
        );
    }

    #[test]
    fn sorting_follows_item_order() {
        let data = DataSet::standard().unwrap().sorted_by_output();

        assert_eq!(data.recipes[0].output().item, Component::IronIngot.into());
        assert!(data
            .recipes
            .windows(2)
            .all(|pair| pair[0].output().item <= pair[1].output().item));
    }
}
