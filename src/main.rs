use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing_subscriber::EnvFilter;

use willitrain::{
    ForecastApiClient, ForecastQuery, MetricKey, RecordCategories, WillItRainConfig,
    build_advisories, render,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WillItRainConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.logging.level.clone()))
        .init();

    let query = parse_query()?;

    let client = ForecastApiClient::new(config)?;
    let (record, explanations) = client.fetch_forecast(&query).await?;

    let categories = RecordCategories::classify(&record)?;
    let advisories = build_advisories(Some(&record), &explanations)?;

    println!("Previsão do Tempo");
    println!("Data: {}", query.date);
    println!("Localização: {:.4}, {:.4}", query.latitude, query.longitude);
    println!();

    println!("Sugestões Personalizadas:");
    for line in &advisories {
        println!("  {line}");
    }
    println!();

    println!(
        "Temperatura média: {} [{}]",
        record.format_temperature(),
        render::temperature_token(categories.temperature)
    );
    print_snippet(&explanations, MetricKey::Temperature);
    println!("Máxima / Mínima:   {}", record.format_temperature_range());
    print_snippet(&explanations, MetricKey::TemperatureMax);
    print_snippet(&explanations, MetricKey::TemperatureMin);

    println!("Precipitação:      {}", record.format_precipitation());
    print_snippet(&explanations, MetricKey::Precipitation);

    println!(
        "Umidade relativa:  {} [{}]",
        record.format_humidity(),
        render::humidity_token(categories.humidity)
    );
    print_snippet(&explanations, MetricKey::Humidity);

    println!("Vento:             {}", record.format_wind());
    print_snippet(&explanations, MetricKey::Wind);

    println!(
        "Neve:              {} — {}",
        record.format_snow_precipitation(),
        categories.snow_depth.depth_label()
    );
    print_snippet(&explanations, MetricKey::SnowPrecipitation);

    println!("Índice UV:         {:.1}", record.uv_index);
    print_snippet(&explanations, MetricKey::Uv);

    if !explanations.general_tips().is_empty() {
        println!();
        println!("Dicas Gerais:");
        for tip in explanations.general_tips() {
            println!("  - {tip}");
        }
    }

    Ok(())
}

fn print_snippet(explanations: &willitrain::ExplanationMap, key: MetricKey) {
    if let Some(text) = explanations.snippet(key) {
        println!("    ↳ {text}");
    }
}

fn parse_query() -> Result<ForecastQuery> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let latitude = match args.first() {
        Some(raw) => raw.parse().context("Invalid latitude")?,
        None => -23.51,
    };
    let longitude = match args.get(1) {
        Some(raw) => raw.parse().context("Invalid longitude")?,
        None => -47.45,
    };
    let date = match args.get(2) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .context("Invalid date, expected YYYY-MM-DD")?,
        None => Utc::now().date_naive(),
    };

    Ok(ForecastQuery {
        latitude,
        longitude,
        date,
    })
}
