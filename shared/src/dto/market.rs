use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Currency key used when reading per-currency maps.
pub const USD: &str = "usd";

/// Per-currency values; the API sends `null` for currencies it has no quote for.
pub type CurrencyMap = HashMap<String, Option<f64>>;

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn usd(map: &CurrencyMap) -> f64 {
    map.get(USD).copied().flatten().unwrap_or(0.0)
}

// ==================== TRENDING ====================

/// `GET /search/trending` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingCoin>,
}

/// Wrapper object around each trending entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingCoin {
    pub item: TrendingItem,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_btc: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: TrendingItemData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendingItemData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_change_percentage_24h: CurrencyMap,
}

impl TrendingItem {
    /// 24h change in USD terms, `0.0` when the API omits the currency.
    pub fn change_24h_usd(&self) -> f64 {
        usd(&self.data.price_change_percentage_24h)
    }
}

// ==================== SEARCH ====================

/// `GET /search?query=` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub coins: Vec<SearchCoin>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// `null` for coins without a market cap ranking
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumb: String,
}

// ==================== COIN DETAIL ====================

/// `GET /coins/{id}` response, reduced to the fields the terminal shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_data: MarketData,
    #[serde(default)]
    pub sentiment_votes_up_percentage: Option<f64>,
    #[serde(default)]
    pub sentiment_votes_down_percentage: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_price: CurrencyMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Links {
    #[serde(default)]
    pub whitepaper: Option<String>,
}

impl CoinDetailResponse {
    /// Current price in USD, `0.0` when the API omits the currency.
    pub fn current_price_usd(&self) -> f64 {
        usd(&self.market_data.current_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_item_reads_usd_change() {
        let body = r#"{"coins":[{"item":{"id":"btc","name":"Bitcoin","symbol":"btc","market_cap_rank":1,"price_btc":1.0,"data":{"price_change_percentage_24h":{"usd":2.5}}}}]}"#;
        let response: TrendingResponse = serde_json::from_str(body).expect("valid trending body");

        let item = &response.coins[0].item;
        assert_eq!(item.market_cap_rank, Some(1));
        assert_eq!(item.change_24h_usd(), 2.5);
    }

    #[test]
    fn test_trending_item_without_data_defaults_change() {
        let body = r#"{"id":"pepe","name":"Pepe","symbol":"pepe","market_cap_rank":null,"price_btc":0.00000001}"#;
        let item: TrendingItem = serde_json::from_str(body).expect("valid trending item");

        assert_eq!(item.market_cap_rank, None);
        assert_eq!(item.change_24h_usd(), 0.0);
    }

    #[test]
    fn test_trending_response_requires_coins() {
        let result = serde_json::from_str::<TrendingResponse>(r#"{"nfts":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_coin_detail_missing_usd_price() {
        let body = r#"{
            "name":"Dogecoin","symbol":"doge",
            "market_data":{"current_price":{"eur":0.1}},
            "sentiment_votes_up_percentage":null,
            "sentiment_votes_down_percentage":12.5,
            "links":{"whitepaper":""}
        }"#;
        let detail: CoinDetailResponse = serde_json::from_str(body).expect("valid detail body");

        assert_eq!(detail.current_price_usd(), 0.0);
        assert_eq!(detail.sentiment_votes_up_percentage, None);
        assert_eq!(detail.sentiment_votes_down_percentage, Some(12.5));
        assert_eq!(detail.links.whitepaper.as_deref(), Some(""));
    }

    #[test]
    fn test_trending_item_null_data_defaults_change() {
        let body = r#"{"id":"pepe","name":"Pepe","symbol":"pepe","market_cap_rank":null,"price_btc":null,"data":null}"#;
        let item: TrendingItem = serde_json::from_str(body).expect("null data is accepted");

        assert_eq!(item.price_btc, 0.0);
        assert_eq!(item.data, TrendingItemData::default());
        assert_eq!(item.change_24h_usd(), 0.0);
    }

    #[test]
    fn test_trending_item_null_change_map_and_value() {
        let body = r#"{"id":"a","name":"A","symbol":"a","price_btc":1.0,"data":{"price_change_percentage_24h":null}}"#;
        let item: TrendingItem = serde_json::from_str(body).expect("null map is accepted");
        assert_eq!(item.change_24h_usd(), 0.0);

        let body = r#"{"id":"b","name":"B","symbol":"b","price_btc":1.0,"data":{"price_change_percentage_24h":{"usd":null,"eur":1.5}}}"#;
        let item: TrendingItem = serde_json::from_str(body).expect("null usd entry is accepted");
        assert_eq!(item.change_24h_usd(), 0.0);
        assert_eq!(item.data.price_change_percentage_24h.get("eur"), Some(&Some(1.5)));
    }

    #[test]
    fn test_search_coin_null_thumb() {
        let body = r#"{"coins":[{"id":"dogecoin","name":"Dogecoin","symbol":"DOGE","market_cap_rank":9,"thumb":null}]}"#;
        let response: SearchResponse = serde_json::from_str(body).expect("null thumb is accepted");

        assert_eq!(response.coins[0].thumb, "");
        assert_eq!(response.coins[0].market_cap_rank, Some(9));
    }

    #[test]
    fn test_coin_detail_null_market_data_and_links() {
        let body = r#"{"name":"Dogecoin","symbol":"doge","market_data":null,"links":null}"#;
        let detail: CoinDetailResponse = serde_json::from_str(body).expect("null sections are accepted");

        assert_eq!(detail.market_data, MarketData::default());
        assert_eq!(detail.links.whitepaper, None);
        assert_eq!(detail.current_price_usd(), 0.0);
    }

    #[test]
    fn test_coin_detail_null_usd_price() {
        let body = r#"{"name":"Dogecoin","symbol":"doge","market_data":{"current_price":{"usd":null}}}"#;
        let detail: CoinDetailResponse = serde_json::from_str(body).expect("null usd price is accepted");
        assert_eq!(detail.current_price_usd(), 0.0);

        let body = r#"{"name":"Dogecoin","symbol":"doge","market_data":{"current_price":{"usd":0.25}}}"#;
        let detail: CoinDetailResponse = serde_json::from_str(body).expect("valid detail body");
        assert_eq!(detail.current_price_usd(), 0.25);
    }
}
