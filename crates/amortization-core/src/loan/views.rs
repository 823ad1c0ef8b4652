//! Read-only projections of a schedule for charting and paged tables.

use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::loan::schedule::AmortizationEntry;
use crate::types::Money;
use crate::AmortizationResult;

/// Parallel per-period series for a stacked principal/interest chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub periods: Vec<u32>,
    pub principal: Vec<Money>,
    pub interest: Vec<Money>,
}

impl ChartSeries {
    pub fn from_schedule(schedule: &[AmortizationEntry]) -> Self {
        Self {
            periods: schedule.iter().map(|e| e.period).collect(),
            principal: schedule.iter().map(|e| e.principal_portion).collect(),
            interest: schedule.iter().map(|e| e.interest_portion).collect(),
        }
    }
}

/// One fixed-size page of a schedule (0-based page index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePage {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_entries: usize,
    pub entries: Vec<AmortizationEntry>,
}

impl SchedulePage {
    pub fn of(schedule: &[AmortizationEntry], page: usize, page_size: usize) -> AmortizationResult<Self> {
        if page_size == 0 {
            return Err(AmortizationError::InvalidInput {
                field: "page_size".into(),
                reason: "Page size must be > 0".into(),
            });
        }

        let total_pages = schedule.len().div_ceil(page_size);
        if page >= total_pages.max(1) {
            return Err(AmortizationError::InvalidInput {
                field: "page".into(),
                reason: format!("Page {page} out of range (0..{total_pages})"),
            });
        }

        let start = page * page_size;
        let end = (start + page_size).min(schedule.len());

        Ok(Self {
            page,
            page_size,
            total_pages,
            total_entries: schedule.len(),
            entries: schedule[start..end].to_vec(),
        })
    }
}
