//! Carousel command: shows which carousels render on a route.

use crate::cli::common::{self, CliResult};
use crate::models::Route;
use crate::services::carousel::{SubcategoryCarouselPlan, TopicCarouselPlan};
use crate::services::{plan_subcategory_carousel, plan_topic_carousel};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the carousels rendered on a page
#[derive(Debug, Clone, Args)]
pub struct CarouselArgs {
    /// Path to the YAML settings file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Page path, e.g. "/latest" or "/c/general/5"
    #[arg(short, long, value_name = "PATH")]
    pub route: String,

    /// Number of topics available for the topic carousel
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub topics: usize,

    /// Number of subcategories of the current category
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub children: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CarouselResponse {
    route: String,
    topic_carousel: Option<TopicCarouselPlan>,
    subcategory_carousel: Option<SubcategoryCarouselPlan>,
}

impl CarouselArgs {
    /// Execute the carousel command
    pub fn execute(&self) -> CliResult<()> {
        let settings = common::load_settings(self.settings.as_deref())?;
        let route = Route::from_path(&self.route);

        let response = CarouselResponse {
            route: route.to_string(),
            topic_carousel: plan_topic_carousel(&route, self.topics, &settings.carousel),
            subcategory_carousel: plan_subcategory_carousel(
                &route,
                self.children,
                &settings.carousel,
            ),
        };

        if self.json {
            return common::print_json(&response);
        }

        println!("Route: {}", response.route);
        match response.topic_carousel {
            Some(plan) => println!(
                "Topic carousel: {} items{}",
                plan.items,
                if plan.show_dots { ", dots" } else { "" }
            ),
            None => println!("Topic carousel: hidden"),
        }
        match response.subcategory_carousel {
            Some(plan) => println!("Subcategory carousel: {} slides, dots", plan.slides),
            None => println!("Subcategory carousel: hidden"),
        }

        Ok(())
    }
}
