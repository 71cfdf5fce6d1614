use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{FactoryError, FactoryResult},
    traits::{PrettyString, INDENT},
};

pub type ItemAmount = u32;
pub type Seconds = u32;
pub type Rate = f64;

const SECONDS_IN_MINUTE: f64 = 60.0;

/// Raw materials that can only be extracted, never crafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    IronOre,
    CopperOre,
    Limestone,
    Coal,
    CrudeOil,
    CateriumOre,
    RawQuartz,
    Sulfur,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::IronOre,
        Resource::CopperOre,
        Resource::Limestone,
        Resource::Coal,
        Resource::CrudeOil,
        Resource::CateriumOre,
        Resource::RawQuartz,
        Resource::Sulfur,
    ];
}

/// Materials produced by some recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    IronIngot,
    IronPlate,
    IronRod,
    CopperIngot,
    Wire,
    Cable,
    Concrete,
    Screw,
    ReinforcedIronPlate,
    Rotor,
    ModularFrame,
    SteelIngot,
    SteelBeam,
    SteelPipe,
    EncasedIndustrialBeam,
    Stator,
    Motor,
    HeavyModularFrame,
    CateriumIngot,
    Quickwire,
    Plastic,
    Fuel,
    Rubber,
    CircuitBoard,
    Computer,
    AILimiter,
    Supercomputer,
    HighSpeedConnector,
}

impl Component {
    pub const ALL: [Component; 28] = [
        Component::IronIngot,
        Component::IronPlate,
        Component::IronRod,
        Component::CopperIngot,
        Component::Wire,
        Component::Cable,
        Component::Concrete,
        Component::Screw,
        Component::ReinforcedIronPlate,
        Component::Rotor,
        Component::ModularFrame,
        Component::SteelIngot,
        Component::SteelBeam,
        Component::SteelPipe,
        Component::EncasedIndustrialBeam,
        Component::Stator,
        Component::Motor,
        Component::HeavyModularFrame,
        Component::CateriumIngot,
        Component::Quickwire,
        Component::Plastic,
        Component::Fuel,
        Component::Rubber,
        Component::CircuitBoard,
        Component::Computer,
        Component::AILimiter,
        Component::Supercomputer,
        Component::HighSpeedConnector,
    ];
}

/// Anything that can appear on either side of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    Resource(Resource),
    Component(Component),
}

impl Item {
    pub fn is_resource(&self) -> bool {
        matches!(self, Item::Resource(_))
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Item::Component(_))
    }

    pub fn as_resource(&self) -> Option<Resource> {
        match self {
            Item::Resource(resource) => Some(*resource),
            Item::Component(_) => None,
        }
    }

    pub fn as_component(&self) -> Option<Component> {
        match self {
            Item::Component(component) => Some(*component),
            Item::Resource(_) => None,
        }
    }
}

impl From<Resource> for Item {
    fn from(resource: Resource) -> Self {
        Item::Resource(resource)
    }
}

impl From<Component> for Item {
    fn from(component: Component) -> Self {
        Item::Component(component)
    }
}

// Member names double as display names.
impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Resource(resource) => fmt::Display::fmt(resource, f),
            Item::Component(component) => fmt::Display::fmt(component, f),
        }
    }
}

/// Quantity of an item consumed or produced by a single batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeItem {
    pub item: Item,
    pub number: ItemAmount,
}

impl RecipeItem {
    pub fn new(item: impl Into<Item>, number: ItemAmount) -> Self {
        Self {
            item: item.into(),
            number,
        }
    }
}

/// Steady-state rate of an item, in units per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeInMinuteItem {
    pub item: Item,
    pub number: Rate,
}

impl RecipeInMinuteItem {
    pub fn new(item: impl Into<Item>, number: Rate) -> Self {
        Self {
            item: item.into(),
            number,
        }
    }
}

/// Per-minute equivalent of a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInMinute {
    pub output: Item,
    pub number: Rate,
    pub inputs: Vec<RecipeInMinuteItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssemblerType {
    Constructor,
    Assembler,
    Manufacturer,
    Smelter,
    Foundry,
    OilRefinery,
}

impl AssemblerType {
    /// Guess the machine from the number of distinct inputs.
    /// Smelter, Foundry and OilRefinery share their input counts with other machines and are
    /// never returned here.
    pub fn from_inputs<T>(inputs: &[T]) -> FactoryResult<Self> {
        match inputs.len() {
            1 => Ok(AssemblerType::Constructor),
            2 => Ok(AssemblerType::Assembler),
            3..=4 => Ok(AssemblerType::Manufacturer),
            other => Err(FactoryError::IllegalInputsSize(other)),
        }
    }
}

impl fmt::Display for AssemblerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single production step: `inputs` turn into `output` every `time` seconds.
///
/// The per-minute form is derived once, on construction, and never changes afterwards, so a
/// recipe can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    output: RecipeItem,
    time: Seconds,
    inputs: Vec<RecipeItem>,
    assembler: AssemblerType,
    in_minute: RecipeInMinute,
}

impl Recipe {
    /// Build a recipe, inferring the assembler type from the input count when `assembler`
    /// is `None`.
    pub fn new(
        output: RecipeItem,
        time: Seconds,
        inputs: Vec<RecipeItem>,
        assembler: Option<AssemblerType>,
    ) -> FactoryResult<Self> {
        if time == 0 {
            return Err(FactoryError::ZeroTime(output.item));
        }

        if let Some(empty) = std::iter::once(&output)
            .chain(&inputs)
            .find(|entry| entry.number == 0)
        {
            return Err(FactoryError::ZeroAmount(empty.item));
        }

        let assembler = match assembler {
            Some(assembler) => assembler,
            None => {
                let inferred = AssemblerType::from_inputs(&inputs)?;
                debug!(output = %output.item, assembler = %inferred, "inferred assembler type");
                inferred
            }
        };

        let in_minute = Self::per_minute(&output, time, &inputs);

        Ok(Self {
            output,
            time,
            inputs,
            assembler,
            in_minute,
        })
    }

    fn per_minute(output: &RecipeItem, time: Seconds, inputs: &[RecipeItem]) -> RecipeInMinute {
        let coefficient = SECONDS_IN_MINUTE / f64::from(time);
        trace!(output = %output.item, coefficient, "deriving per-minute rates");

        RecipeInMinute {
            output: output.item,
            number: f64::from(output.number) * coefficient,
            inputs: inputs
                .iter()
                .map(|input| RecipeInMinuteItem {
                    item: input.item,
                    number: f64::from(input.number) * coefficient,
                })
                .collect(),
        }
    }

    pub fn output(&self) -> &RecipeItem {
        &self.output
    }

    pub fn time(&self) -> Seconds {
        self.time
    }

    pub fn inputs(&self) -> &[RecipeItem] {
        &self.inputs
    }

    pub fn assembler(&self) -> AssemblerType {
        self.assembler
    }

    pub fn in_minute(&self) -> &RecipeInMinute {
        &self.in_minute
    }
}

impl PrettyString for Recipe {
    fn pretty_string(&self) -> String {
        let mut pretty = format!("{}:\n", self.output.item);
        for input in &self.inputs {
            pretty.push_str(&format!("{INDENT}{}\n", input.item));
        }

        pretty
    }
}
