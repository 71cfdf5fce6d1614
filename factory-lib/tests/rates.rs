use factory_lib::prelude::*;
use factory_lib::report::format_number;
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = Item> {
    prop_oneof![
        proptest::sample::select(Resource::ALL.to_vec()).prop_map(Item::from),
        proptest::sample::select(Component::ALL.to_vec()).prop_map(Item::from),
    ]
}

fn arb_recipe_item() -> impl Strategy<Value = RecipeItem> {
    (arb_item(), 1u32..500).prop_map(|(item, number)| RecipeItem::new(item, number))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A one minute recipe already is its own per-minute form.
    #[test]
    fn minute_long_recipe_keeps_numbers(
        output in arb_recipe_item(),
        inputs in proptest::collection::vec(arb_recipe_item(), 1..=4),
    ) {
        let recipe = Recipe::new(output, 60, inputs.clone(), None).unwrap();
        let in_minute = recipe.in_minute();

        prop_assert_eq!(in_minute.number, f64::from(output.number));
        for (derived, batch) in in_minute.inputs.iter().zip(&inputs) {
            prop_assert_eq!(derived.item, batch.item);
            prop_assert_eq!(derived.number, f64::from(batch.number));
        }
    }

    #[test]
    fn rates_scale_by_sixty_over_time(
        output in arb_recipe_item(),
        time in 1u32..3600,
        inputs in proptest::collection::vec(arb_recipe_item(), 1..=4),
    ) {
        let recipe = Recipe::new(output, time, inputs, None).unwrap();
        let expected = f64::from(output.number) * (60.0 / f64::from(time));

        prop_assert_eq!(recipe.in_minute().number, expected);
        prop_assert_eq!(
            recipe.in_minute().number.to_bits(),
            recipe.in_minute().number.to_bits()
        );
        prop_assert_eq!(recipe.in_minute().inputs.len(), recipe.inputs().len());
    }

    #[test]
    fn too_many_inputs_need_explicit_assembler(
        output in arb_recipe_item(),
        inputs in proptest::collection::vec(arb_recipe_item(), 5..10),
    ) {
        let err = Recipe::new(output, 10, inputs.clone(), None).unwrap_err();
        prop_assert_eq!(err, FactoryError::IllegalInputsSize(inputs.len()));

        let recipe = Recipe::new(output, 10, inputs, Some(AssemblerType::OilRefinery)).unwrap();
        prop_assert_eq!(recipe.assembler(), AssemblerType::OilRefinery);
    }

    #[test]
    fn inexact_numbers_never_under_report(number in 0.0f64..1_000_000.0) {
        let rendered: f64 = format_number(number, false).parse().unwrap();

        prop_assert!(rendered >= number);
        prop_assert!(rendered - number < 1.0);
        prop_assert_eq!(rendered.fract(), 0.0);
    }

    #[test]
    fn exact_numbers_round_trip(
        number in prop_oneof![0.0f64..1_000_000.0, 1_000_000.0f64..1e300, 1e-300f64..1e-3],
    ) {
        let rendered: f64 = format_number(number, true).parse().unwrap();

        prop_assert_eq!(rendered, number);
    }
}

#[test]
fn iron_ingot_end_to_end() {
    let recipe = Recipe::new(
        RecipeItem::new(Component::IronIngot, 1),
        2,
        vec![RecipeItem::new(Resource::IronOre, 1)],
        None,
    )
    .unwrap();

    assert_eq!(recipe.assembler(), AssemblerType::Constructor);
    assert_eq!(recipe.in_minute().number, 30.0);

    let report = Report::new(vec![
        OreReportPart::new(Resource::IronOre, recipe.in_minute().inputs[0].number, false).into(),
        ItemReportPart::for_rate(&recipe, 30.0, false).unwrap().into(),
    ]);

    assert_eq!(
        report.pretty_string(),
        "Resource: IronOre\n    Number: 30\n\nComponent: IronIngot\n    Number: 30\n    Constructor: 1"
    );
}

#[test]
fn per_minute_rates_serialize() {
    let data = DataSet::standard().unwrap();
    let json = serde_json::to_value(data.get_recipe(Component::Cable).in_minute()).unwrap();

    assert_eq!(json["output"]["Component"], "Cable");
    assert_eq!(json["number"], 30.0);
    assert_eq!(json["inputs"][0]["item"]["Component"], "Wire");
    assert_eq!(json["inputs"][0]["number"], 60.0);
}
