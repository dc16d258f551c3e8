//! Query parameters shared by several endpoints.

use brigade::{BuffetStatus, DietaryType, MenuDataset, MenuFilter};
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Menu filters as comma-separated lists, e.g. `?category=Pasta,Cake&type=Veg`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub dietary_type: Option<String>,
    pub buffet: Option<String>,
}

impl FilterQuery {
    pub fn to_filter(&self) -> Result<MenuFilter, ApiError> {
        let dietary_types = split_list(self.dietary_type.as_deref())
            .map(str::parse::<DietaryType>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApiError::BadRequest)?;
        let buffet_statuses = split_list(self.buffet.as_deref())
            .map(str::parse::<BuffetStatus>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApiError::BadRequest)?;

        Ok(MenuFilter::all()
            .with_categories(split_list(self.category.as_deref()))
            .with_dietary_types(dietary_types)
            .with_buffet_statuses(buffet_statuses))
    }

    /// The request's view of the shared menu.
    pub fn select(&self, state: &AppState) -> Result<MenuDataset, ApiError> {
        let filter = self.to_filter()?;
        Ok(state.menu.filter(&filter))
    }
}

/// Clamp a numeric parameter into `min..=max`. Negative values land on `min`.
pub fn clamp_param(value: i64, min: u32, max: u32) -> u32 {
    u32::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(min)
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
