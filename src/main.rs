use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ultrakitchen::{
    config::Config,
    pages::{current_year, CheckoutPage, MenuPage, NavToggle, TextMount},
    reveal::{RevealTracker, CARD_THRESHOLD},
    scanner::{CardScanner, MenuCard},
    store::{MemorySession, OrderStore, SessionStore},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Scenario to walk through: menu, checkout, or session
    #[arg(default_value = "session")]
    scenario: String,
}

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = Config::load();
    let session = MemorySession::new();

    println!("Ultra-Kitchen demo — © {}", current_year());

    match args.scenario.as_str() {
        "menu" => {
            menu_visit(&config, session);
        }
        "checkout" => {
            let session = menu_visit(&config, session);
            checkout_visit(&config, session);
        }
        _ => {
            let session = menu_visit(&config, session);
            let session = second_menu_visit(&config, session);
            checkout_visit(&config, session);
        }
    }
}

fn mains_page() -> Vec<MenuCard> {
    vec![
        MenuCard {
            name: "Jollof Rice".to_string(),
            price_attr: Some(1500.0),
            price_text: "₦1,500".to_string(),
            qty_value: "0".to_string(),
        },
        MenuCard {
            name: "Pepper Soup".to_string(),
            price_attr: None,
            price_text: "₦700".to_string(),
            qty_value: "0".to_string(),
        },
    ]
}

fn grills_page() -> Vec<MenuCard> {
    vec![MenuCard {
        name: "Suya".to_string(),
        price_attr: Some(2000.0),
        price_text: "₦2,000".to_string(),
        qty_value: "0".to_string(),
    }]
}

fn print_mounts(list: &Option<TextMount>, total: &Option<TextMount>, currency: &str) {
    if let Some(list) = list {
        for line in &list.lines {
            println!("  {line}");
        }
    }
    if let Some(total) = total {
        println!("  Total: {currency}{}", total.text());
    }
}

fn menu_visit(config: &Config, session: MemorySession) -> MemorySession {
    println!("\n-- Mains menu --");

    let mut nav = NavToggle::new();
    nav.toggle();
    println!("nav [{}]", nav.icon());
    nav.click_outside();
    println!("nav [{}]", nav.icon());

    let mut reveals = RevealTracker::new(CARD_THRESHOLD);
    for card in mains_page() {
        if reveals.observe(&card.name, 0.4) {
            println!("reveal: {}", card.name);
        }
    }

    let store = OrderStore::new(&config.store_key, session);
    let mut page = MenuPage::new(
        CardScanner::new(mains_page()),
        store,
        &config.currency,
        Some(TextMount::new()),
        Some(TextMount::new()),
    );

    page.refresh();
    page.scanner_mut().set_qty("Jollof Rice", "2");
    page.refresh();
    page.scanner_mut().set_qty("Pepper Soup", "1");
    page.refresh();

    print_mounts(&page.order_list, &page.total_elem, &config.currency);

    page.into_session()
}

fn second_menu_visit(config: &Config, session: MemorySession) -> MemorySession {
    println!("\n-- Grills menu --");

    let store = OrderStore::new(&config.store_key, session);
    let mut page = MenuPage::new(
        CardScanner::new(grills_page()),
        store,
        &config.currency,
        Some(TextMount::new()),
        Some(TextMount::new()),
    );

    page.scanner_mut().set_qty("Suya", "1");
    page.refresh();

    print_mounts(&page.order_list, &page.total_elem, &config.currency);

    page.into_session()
}

fn checkout_visit(config: &Config, session: impl SessionStore) {
    println!("\n-- Checkout --");

    let store = OrderStore::new(&config.store_key, session);
    let mut page = CheckoutPage::new(
        store,
        &config.currency,
        Some(TextMount::new()),
        Some(TextMount::new()),
    );

    page.render();
    print_mounts(&page.order_list, &page.total_elem, &config.currency);

    let outcome = page.submit();
    println!("alert: {}", outcome.message());

    let outcome = page.submit();
    println!("alert: {}", outcome.message());
}
