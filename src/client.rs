// src/client.rs
//
// The two lookups. A client can only be built with an API key in hand,
// so a missing key stops us before any request is made.

use crate::config::{options::SchoolFilter, Config};
use crate::core::{HttpTransport, Transport};
use crate::error::{ConfigError, QueryError};
use crate::records::{MealRecord, SchoolRecord};
use crate::session::MealQueryKey;
use crate::specs::{self, Fetched};

/// Client over an erased transport, as held by the GUI.
pub type DynClient = NeisClient<Box<dyn Transport>>;

pub struct NeisClient<T: Transport = HttpTransport> {
    api_key: String,
    school_info_url: String,
    meal_info_url: String,
    transport: T,
}

impl NeisClient<HttpTransport> {
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        Self::with_transport(cfg, HttpTransport::new())
    }
}

impl<T: Transport> NeisClient<T> {
    pub fn with_transport(cfg: &Config, transport: T) -> Result<Self, ConfigError> {
        let api_key = cfg.api_key()?;
        Ok(Self {
            api_key: s!(api_key),
            school_info_url: cfg.school_info_url.clone(),
            meal_info_url: cfg.meal_info_url.clone(),
            transport,
        })
    }

    /// School directory lookup; first page only.
    pub fn lookup_schools(&self, filter: &SchoolFilter) -> Result<Vec<SchoolRecord>, QueryError> {
        self.lookup_schools_page(filter).map(|page| page.records)
    }

    /// Same as `lookup_schools`, keeping the upstream total for truncation notices.
    pub fn lookup_schools_page(
        &self,
        filter: &SchoolFilter,
    ) -> Result<Fetched<SchoolRecord>, QueryError> {
        let params = specs::schools::build_params(&self.api_key, filter);
        logf!(
            "Query: schools name={:?} kind={:?} region={:?}",
            filter.name(),
            filter.kind(),
            filter.region()
        );

        let body = self
            .transport
            .get(&self.school_info_url, &params)
            .inspect_err(|e| loge!("Query: schools transport error: {}", e))?;
        let page = specs::schools::parse(&body)
            .inspect_err(|e| loge!("Query: schools bad response: {}", e))?;

        logf!("Query: schools OK rows={} total={:?}", page.records.len(), page.total);
        Ok(page)
    }

    /// Meal menu for one school on one day.
    pub fn lookup_meals(&self, key: &MealQueryKey) -> Result<Vec<MealRecord>, QueryError> {
        let params = specs::meals::build_params(&self.api_key, key);
        logf!(
            "Query: meals office={} school={} date={}",
            key.office_code(),
            key.school_code(),
            key.date_param()
        );

        let body = self
            .transport
            .get(&self.meal_info_url, &params)
            .inspect_err(|e| loge!("Query: meals transport error: {}", e))?;
        let page = specs::meals::parse(&body)
            .inspect_err(|e| loge!("Query: meals bad response: {}", e))?;

        logf!("Query: meals OK rows={}", page.records.len());
        Ok(page.records)
    }
}

impl<T: Transport + 'static> NeisClient<T> {
    pub fn boxed(self) -> DynClient {
        NeisClient {
            api_key: self.api_key,
            school_info_url: self.school_info_url,
            meal_info_url: self.meal_info_url,
            transport: Box::new(self.transport),
        }
    }
}
