pub use crate::data::DataSet;
pub use crate::entities::{
    AssemblerType, Component, Item, Recipe, RecipeInMinute, RecipeInMinuteItem, RecipeItem,
    Resource,
};
pub use crate::error::{FactoryError, FactoryResult};
pub use crate::report::{ItemReportPart, OreReportPart, Report, ReportPart};
pub use crate::traits::{DataSource, PrettyString};
