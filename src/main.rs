use colored::Colorize;
use contact_runtime::model::FieldId;
use contact_runtime::view::MemoryView;
use contact_runtime::{FormConfig, FormContext, FormSubmissionController, SubmitAttempt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var("CONTACT_FORM_CONFIG") {
        Ok(path) => FormConfig::load(&path)?,
        Err(_) => FormConfig::default(),
    };

    let view = MemoryView::contact_form();
    let form = FormSubmissionController::attach(view.clone(), FormContext::new(config))?;

    view.set_value(FieldId::Name, "Kari Nordmann");
    view.set_value(FieldId::Email, "kari@example");
    view.set_value(FieldId::Phone, "1234 5678");

    println!("{}", "--- FIRST ATTEMPT ---".bold());
    report(&form.attempt_submit().await, &view);

    view.set_value(FieldId::Email, "kari@example.no");
    view.set_value(FieldId::Phone, "+47 934 56 789");
    view.set_value(FieldId::JobType, "elbillader");
    view.set_value(FieldId::Description, "Montering av lader i garasje");
    view.set_value(FieldId::SiteVisit, true);

    println!("{}", "--- SECOND ATTEMPT ---".bold());
    report(&form.attempt_submit().await, &view);

    form.dispose();
    Ok(())
}

fn report(attempt: &SubmitAttempt, view: &MemoryView) {
    match attempt {
        SubmitAttempt::Rejected(_) => {
            for annotation in view.annotations() {
                println!("{} {}: {}", "✗".red(), annotation.after, annotation.text);
            }
        }
        SubmitAttempt::Delivered(outcome) => {
            println!("{} {:#?}", "✓ sent".green(), outcome);
        }
        other => println!("{} {:?}", "•".yellow(), other),
    }
}
