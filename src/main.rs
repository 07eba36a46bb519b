use feroauth_wui::{
    config::Config,
    i18n::{I18n, MessageKey, Params, Translate},
    session::{HttpSessionSource, SessionStore},
    telemetry, translator,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::load()?;
    tracing::info!("Loaded configuration: {:?}", config);

    let i18n = I18n::from_config(&config.i18n)?;
    let source = HttpSessionSource::new(&config.client)?;
    tracing::info!(url = %source.url(), lang = i18n.lang(), "Loading session info");

    let store = SessionStore::new(source);
    if let Err(err) = store.load_from_server().await {
        eprintln!("{}", translator::error_message(&err, &i18n));
        std::process::exit(1);
    }

    let data = store.data();
    if let Some(name) = data.get_str("name") {
        println!(
            "{}",
            i18n.t_with(MessageKey::HelloName, &Params::new().with("name", name))
        );
    }
    println!("{}", serde_json::to_string_pretty(&data)?);

    Ok(())
}
