//! Calculator Example
//!
//! Runs the salon retail calculator once from the command line.
//!
//! Use `-c` to load a catalog fixture by name
//! Use `-s` to restore and save the session in a YAML state file
//! Use `-b`/`-p` to pick a brand and product, `--cost`/`--price` to override
//! the catalog pricing, and `-d`/`--stylists`/`-u` to describe the promotion

use std::io;

use anyhow::Result;

use clap::Parser;
use salon_retail::{
    fixtures::Fixture,
    logging::init_subscriber,
    overrides::PriceField,
    report::Report,
    session::{PromotionField, Resolver},
    store::{SessionStore, YamlFileStore},
    utils::CalculatorArgs,
};
use tracing::info;

/// Calculator Example
pub fn main() -> Result<()> {
    let args = CalculatorArgs::parse();

    init_subscriber(&args.log_level, args.log_format)?;

    let catalog = Fixture::with_base_path(&args.fixtures).load_catalog(&args.catalog)?;

    let resolver = if args.free_text {
        Resolver::unlocked(&catalog)
    } else {
        Resolver::new(&catalog)
    };

    let store = args.state.as_ref().map(YamlFileStore::new);

    let mut state = match store.as_ref().and_then(YamlFileStore::load) {
        Some(mut restored) => {
            resolver.reconcile(&mut restored);
            restored
        }
        None => resolver.initial_state(),
    };

    if let Some(brand) = args.brand.as_deref() {
        resolver.on_brand_changed(&mut state, brand);
    }

    if let Some(product) = args.product.as_deref() {
        resolver.on_product_changed(&mut state, product);
    }

    for (field, raw) in [
        (PriceField::Cost, args.cost.as_deref()),
        (PriceField::Price, args.price.as_deref()),
    ] {
        if let Some(raw) = raw {
            resolver.on_field_edited(&mut state, field, raw);
        }
    }

    for (field, raw) in [
        (PromotionField::Days, args.days.as_deref()),
        (PromotionField::Stylists, args.stylists.as_deref()),
        (PromotionField::UnitsPerStylistPerDay, args.per_stylist.as_deref()),
    ] {
        if let Some(raw) = raw {
            resolver.on_promotion_field_edited(&mut state, field, raw);
        }
    }

    let product_name = state
        .product_id
        .as_deref()
        .map(|id| catalog.find_product(id).map_or(id, |p| p.name.as_str()));

    let stdout = io::stdout();
    let handle = stdout.lock();

    Report::new(state.promotion_inputs(), catalog.currency())
        .with_product(state.brand.as_deref(), product_name)
        .write_to(handle)?;

    if let Some(store) = store {
        store.save(&state)?;

        info!(path = %store.path().display(), "session saved");
    }

    Ok(())
}
