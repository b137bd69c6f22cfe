//! The navigation menu demo: one plain link and two independent
//! dropdowns. Builds the page, activates the first dropdown, rebuilds,
//! and prints the markup of both generations.

use std::fs::File;
use std::sync::Arc;

use furl::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("nav.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let registry = HandlerRegistry::new();
    let more_open = ToggleState::new();
    let even_more_open = ToggleState::new();

    // The containing scope owns transport: when the first dropdown
    // changes, it would relay the flag to the server.
    let sync_more: ChangeHandler = Arc::new(|expanded| {
        let payload = serde_json::json!({ "dropdown_1_state": expanded });
        log::info!("sync PATCH user {payload}");
    });

    let page = nav(&registry, &more_open, &even_more_open, &sync_more);
    println!("{}", markup(&page));

    // User activates "More items"
    dispatch_activation(&page, &registry, "more-items-button")?;

    // Note: nothing closes "Even more items" when "More items" opens.
    // An accordion policy would live here, in the scope that owns both
    // states, not in the widget.
    registry.clear();
    let page = nav(&registry, &more_open, &even_more_open, &sync_more);
    println!("{}", markup(&page));

    Ok(())
}

fn nav(
    registry: &HandlerRegistry,
    more_open: &ToggleState,
    even_more_open: &ToggleState,
    sync_more: &ChangeHandler,
) -> Element {
    Element::nav()
        .child(Element::link().attr("href", "/page1").text_content("Page 1"))
        .child(
            Dropdown::new()
                .state(more_open)
                .id("more-items")
                .label("More items")
                .on_change(sync_more.clone())
                .children(vec![
                    MenuItem::link("/page2").label("Page 2").element(),
                    MenuItem::link("/page3").label("Page 3").element(),
                    MenuItem::link("/page4").label("Page 4").element(),
                ])
                .build(registry),
        )
        .child(
            Dropdown::new()
                .state(even_more_open)
                .id("even-more-items")
                .label("Even more items")
                .children(vec![
                    MenuItem::link("/page5").label("Page 5").element(),
                    MenuItem::link("/page6").label("Page 6").element(),
                ])
                .build(registry),
        )
}
