use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use client_core::{
    FormViews, HttpSelectionGateway, Navigator, OptionList, SearchFormController, SelectorView,
    StateMarker, StatusView,
};
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the search backend, e.g. http://127.0.0.1:5000
    #[arg(long)]
    server_url: String,
    /// Address of the page being (re)loaded, possibly carrying a prior
    /// outcome such as /?error=6 or /?success=1.
    #[arg(long, default_value = "/")]
    page_address: String,
    /// Committee id to select after startup.
    #[arg(long)]
    committee: Option<String>,
    /// Qualification id to select after startup.
    #[arg(long)]
    qualification: Option<String>,
    /// Weight id to select after startup.
    #[arg(long)]
    weight: Option<String>,
    /// Submit the form after applying the selections.
    #[arg(long)]
    submit: bool,
}

struct ConsoleSelector {
    name: &'static str,
    value: Mutex<String>,
    hidden: Mutex<bool>,
}

impl ConsoleSelector {
    fn new(name: &'static str, hidden: bool) -> Arc<Self> {
        Arc::new(Self {
            name,
            value: Mutex::new(String::new()),
            hidden: Mutex::new(hidden),
        })
    }

    fn is_hidden(&self) -> bool {
        *self.hidden.lock().unwrap()
    }
}

impl SelectorView for ConsoleSelector {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }

    fn reveal(&self) {
        *self.hidden.lock().unwrap() = false;
        println!("[{}] shown", self.name);
    }

    fn hide(&self) {
        *self.hidden.lock().unwrap() = true;
        println!("[{}] hidden", self.name);
    }

    fn replace_options(&self, options: &OptionList) {
        match serde_json::to_string(options) {
            Ok(rendered) => println!("[{}] options: {rendered}", self.name),
            Err(err) => println!("[{}] options unprintable: {err}", self.name),
        }
    }
}

struct ConsoleStatus;

impl StatusView for ConsoleStatus {
    fn reveal(&self) {}

    fn set_marker(&self, marker: StateMarker) {
        println!("[result] marker: {marker:?}");
    }

    fn clear_marker(&self, _marker: StateMarker) {}

    fn set_message(&self, message: &str) {
        println!("[result] {message}");
    }
}

struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: &str) {
        println!("[navigate] {target}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let gateway = Arc::new(HttpSelectionGateway::new(args.server_url)?);
    let committee = ConsoleSelector::new("committee", false);
    let qualification = ConsoleSelector::new("qualification", false);
    let weight = ConsoleSelector::new("weight", true);
    let controller = SearchFormController::new(
        gateway,
        FormViews {
            committee: committee.clone(),
            qualification: qualification.clone(),
            weight: weight.clone(),
            status: Arc::new(ConsoleStatus),
            navigator: Arc::new(ConsoleNavigator),
        },
    );

    controller.start(&args.page_address).await;

    if let Some(id) = args.committee {
        committee.set_value(&id);
        controller.committee_changed();
    }
    if let Some(id) = args.qualification {
        qualification.set_value(&id);
        controller.qualification_changed().await;
    }
    if let Some(id) = args.weight {
        weight.set_value(&id);
        controller.weight_changed();
    }
    if args.submit {
        controller.form_submitted();
        info!("form submitted; the backend reports the outcome on the next page load");
    }

    // Detached committee/weight commits need a moment to reach the server.
    tokio::time::sleep(Duration::from_millis(250)).await;

    println!(
        "weight selector: {}",
        if weight.is_hidden() { "hidden" } else { "visible" }
    );
    println!("display state: {:?}", controller.status().state());
    Ok(())
}
