use serde::{Deserialize, Serialize};

/// ADR used for comparisons when a city has no market data.
pub const DEFAULT_CITY_ADR: u32 = 250;
pub const MONTH_LABELS: [&str; 6] = ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"];
/// City shown on the market page when the property's own city has no data.
pub const FALLBACK_MARKET_CITY: &str = "Florence";

/// Six trailing months of a property's trading figures, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    pub hotel_id: String,
    pub monthly_revenue: Vec<u64>,
    pub bookings: Vec<u32>,
    pub adr: Vec<u32>,
    pub cancellation_rate: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceKpis {
    pub revenue: u64,
    pub bookings: u32,
    pub adr: u32,
    pub cancellation_rate: u8,
}

impl PerformanceSeries {
    /// Figures for the most recent month, if every series has one.
    pub fn latest(&self) -> Option<PerformanceKpis> {
        Some(PerformanceKpis {
            revenue: *self.monthly_revenue.last()?,
            bookings: *self.bookings.last()?,
            adr: *self.adr.last()?,
            cancellation_rate: *self.cancellation_rate.last()?,
        })
    }
}

/// Percentage gap between a property's ADR and its city average, rounded.
pub fn adr_gap_pct(latest_adr: u32, city_avg: u32) -> i32 {
    if city_avg == 0 {
        return 0;
    }
    let gap = (f64::from(latest_adr) - f64::from(city_avg)) / f64::from(city_avg) * 100.0;
    gap.round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBands {
    pub budget: u32,
    pub mid: u32,
    pub luxury: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    AboveAverage,
    BelowAverage,
}

impl MarketPosition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AboveAverage => "Above Avg",
            Self::BelowAverage => "Below Avg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub city: String,
    pub avg_adr: u32,
    pub occupancy: Vec<u8>,
    pub pricing_bands: PricingBands,
    pub demand: DemandLevel,
}

impl MarketSnapshot {
    pub fn peak_occupancy(&self) -> Option<u8> {
        self.occupancy.iter().copied().max()
    }

    /// Only a rate strictly above the city ADR counts as above average.
    pub fn position(&self, base_rate: u32) -> MarketPosition {
        if base_rate > self.avg_adr {
            MarketPosition::AboveAverage
        } else {
            MarketPosition::BelowAverage
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyPoint {
    pub month: String,
    pub occupancy: u8,
}

/// Market page for one property: the city snapshot and the KPIs derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIntel {
    pub requested_city: String,
    pub city: String,
    /// True when `city` is the fallback market rather than the property's own.
    pub fallback: bool,
    pub avg_adr: u32,
    pub demand: DemandLevel,
    pub peak_occupancy: Option<u8>,
    pub position: Option<MarketPosition>,
    pub occupancy_trend: Vec<OccupancyPoint>,
    pub pricing_bands: PricingBands,
}

impl MarketIntel {
    /// Uses the property's city, then `FALLBACK_MARKET_CITY`; `None` when neither is known.
    pub fn resolve(
        markets: &[MarketSnapshot],
        city: &str,
        lead_base_rate: Option<u32>,
    ) -> Option<Self> {
        let (snapshot, fallback) = match markets.iter().find(|market| market.city == city) {
            Some(snapshot) => (snapshot, false),
            None => (
                markets
                    .iter()
                    .find(|market| market.city == FALLBACK_MARKET_CITY)?,
                true,
            ),
        };

        Some(Self {
            requested_city: city.to_string(),
            city: snapshot.city.clone(),
            fallback,
            avg_adr: snapshot.avg_adr,
            demand: snapshot.demand,
            peak_occupancy: snapshot.peak_occupancy(),
            position: lead_base_rate.map(|rate| snapshot.position(rate)),
            occupancy_trend: MONTH_LABELS
                .iter()
                .zip(&snapshot.occupancy)
                .map(|(month, occupancy)| OccupancyPoint {
                    month: month.to_string(),
                    occupancy: *occupancy,
                })
                .collect(),
            pricing_bands: snapshot.pricing_bands,
        })
    }
}

/// What the performance page shows next to the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub hotel_id: String,
    pub latest: Option<PerformanceKpis>,
    pub city_avg_adr: u32,
    pub adr_gap_pct: Option<i32>,
    pub peak_occupancy: Option<u8>,
    pub position: Option<MarketPosition>,
}

impl PerformanceSummary {
    pub fn build(
        series: &PerformanceSeries,
        market: Option<&MarketSnapshot>,
        lead_base_rate: Option<u32>,
    ) -> Self {
        let latest = series.latest();
        let city_avg_adr = market.map_or(DEFAULT_CITY_ADR, |snapshot| snapshot.avg_adr);

        Self {
            hotel_id: series.hotel_id.clone(),
            latest,
            city_avg_adr,
            adr_gap_pct: latest.map(|kpis| adr_gap_pct(kpis.adr, city_avg_adr)),
            peak_occupancy: market.and_then(MarketSnapshot::peak_occupancy),
            position: market
                .zip(lead_base_rate)
                .map(|(snapshot, rate)| snapshot.position(rate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> PerformanceSeries {
        PerformanceSeries {
            hotel_id: "h1".to_string(),
            monthly_revenue: vec![120_000, 172_000],
            bookings: vec![320, 440],
            adr: vec![375, 391],
            cancellation_rate: vec![8, 3],
        }
    }

    fn florence() -> MarketSnapshot {
        MarketSnapshot {
            city: "Florence".to_string(),
            avg_adr: 350,
            occupancy: vec![72, 75, 80, 85, 82, 78],
            pricing_bands: PricingBands {
                budget: 120,
                mid: 250,
                luxury: 450,
            },
            demand: DemandLevel::High,
        }
    }

    #[test]
    fn latest_reads_final_month() {
        let kpis = series().latest().expect("series populated");
        assert_eq!(kpis.revenue, 172_000);
        assert_eq!(kpis.cancellation_rate, 3);

        let mut empty = series();
        empty.adr.clear();
        assert!(empty.latest().is_none());
    }

    #[test]
    fn adr_gap_rounds_to_whole_percent() {
        assert_eq!(adr_gap_pct(391, 350), 12);
        assert_eq!(adr_gap_pct(204, 280), -27);
        assert_eq!(adr_gap_pct(100, 0), 0);
    }

    #[test]
    fn summary_falls_back_to_default_city_adr() {
        let summary = PerformanceSummary::build(&series(), None, Some(180));
        assert_eq!(summary.city_avg_adr, DEFAULT_CITY_ADR);
        assert_eq!(summary.adr_gap_pct, Some(56));
        assert!(summary.position.is_none());
    }

    #[test]
    fn market_intel_uses_own_city_when_known() {
        let markets = vec![florence()];
        let intel = MarketIntel::resolve(&markets, "Florence", Some(500)).expect("known city");

        assert!(!intel.fallback);
        assert_eq!(intel.demand.label(), "High");
        assert_eq!(intel.position, Some(MarketPosition::AboveAverage));
        assert_eq!(intel.occupancy_trend.len(), MONTH_LABELS.len());
        assert_eq!(intel.occupancy_trend[3].month, "Dec");
        assert_eq!(intel.occupancy_trend[3].occupancy, 85);
        assert_eq!(intel.pricing_bands.luxury, 450);
    }

    #[test]
    fn market_intel_falls_back_to_florence() {
        let markets = vec![florence()];
        let intel = MarketIntel::resolve(&markets, "Bologna", Some(180)).expect("fallback city");

        assert!(intel.fallback);
        assert_eq!(intel.requested_city, "Bologna");
        assert_eq!(intel.city, FALLBACK_MARKET_CITY);
        assert_eq!(intel.avg_adr, 350);
        assert_eq!(intel.peak_occupancy, Some(85));
        assert_eq!(intel.position, Some(MarketPosition::BelowAverage));

        assert!(MarketIntel::resolve(&[], "Bologna", None).is_none());
    }

    #[test]
    fn summary_uses_market_snapshot() {
        let market = florence();
        let summary = PerformanceSummary::build(&series(), Some(&market), Some(180));
        assert_eq!(summary.peak_occupancy, Some(85));
        assert_eq!(summary.position, Some(MarketPosition::BelowAverage));
        assert_eq!(market.position(351).label(), "Above Avg");
    }
}
