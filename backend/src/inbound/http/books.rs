//! Catalogue API handlers.
//!
//! ```text
//! GET /api/books?seed=42&locale=en_US&likesAvg=3.5&reviewsAvg=2&page=0&pageSize=20
//! GET /api/books/export?seed=42&region=de&page=3&pageSize=20
//! GET /api/books/random-seed
//! ```

use actix_web::{HttpResponse, get, http::header, web};
use book_data::{Book, GenerationRequest, write_csv};
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::IntoParams;

use crate::domain::{CatalogueLimits, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

const EXPORT_FILENAME: &str = "books.csv";

/// Query parameters shared by the catalogue endpoints.
///
/// Every field is optional; omitted fields fall back to
/// [`GenerationRequest::default`].
///
/// # Examples
/// ```
/// use backend::inbound::http::books::BooksQuery;
/// use book_data::GenerationRequest;
///
/// let query = BooksQuery {
///     locale: Some("fr".to_owned()),
///     page: Some(2),
///     ..BooksQuery::default()
/// };
/// let request = GenerationRequest::from(query);
/// assert_eq!(request.locale, "fr");
/// assert_eq!(request.page_size, 20);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BooksQuery {
    /// Locale code such as `en_US`, `fr`, or `de`. Also accepted as `region`.
    #[serde(alias = "region")]
    pub locale: Option<String>,
    /// Opaque base seed.
    pub seed: Option<String>,
    /// Average likes per book.
    pub likes_avg: Option<f64>,
    /// Average reviews per book.
    pub reviews_avg: Option<f64>,
    /// Zero-based page number.
    pub page: Option<u64>,
    /// Records per page.
    pub page_size: Option<u32>,
}

impl From<BooksQuery> for GenerationRequest {
    fn from(query: BooksQuery) -> Self {
        let defaults = Self::default();
        Self {
            locale: query.locale.unwrap_or(defaults.locale),
            seed: query.seed.unwrap_or(defaults.seed),
            likes_avg: query.likes_avg.unwrap_or(defaults.likes_avg),
            reviews_avg: query.reviews_avg.unwrap_or(defaults.reviews_avg),
            page: query.page.unwrap_or(defaults.page),
            page_size: query.page_size.unwrap_or(defaults.page_size),
        }
    }
}

type LimitCheck = fn(&CatalogueLimits, &GenerationRequest) -> Result<(), Error>;

/// Resolve the query into a request and apply the service limits.
fn admit(state: &HttpState, query: BooksQuery, check: LimitCheck) -> ApiResult<GenerationRequest> {
    let request = GenerationRequest::from(query);
    check(&state.limits, &request)?;
    Ok(request)
}

/// Generate one page of books.
#[utoipa::path(
    get,
    path = "/api/books",
    params(BooksQuery),
    responses(
        (status = 200, description = "Books for the requested page", body = [BookSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(
    state: web::Data<HttpState>,
    query: web::Query<BooksQuery>,
) -> ApiResult<web::Json<Vec<Book>>> {
    let request = admit(&state, query.into_inner(), CatalogueLimits::check)?;
    debug!(
        seed = %request.seed,
        locale = %request.locale,
        page = request.page,
        page_size = request.page_size,
        "generating catalogue page"
    );
    let books = state.catalogue.page(request).await?;
    Ok(web::Json(books))
}

/// Export every book up to and including the requested page as CSV.
///
/// The window always starts at index 1, so `page=3&pageSize=20` exports
/// records 1 to 60. `page * pageSize` is capped by the service's export
/// limit.
#[utoipa::path(
    get,
    path = "/api/books/export",
    params(BooksQuery),
    responses(
        (
            status = 200,
            description = "CSV attachment",
            content_type = "text/csv",
            body = String,
            headers(("Content-Disposition" = String, description = "attachment; filename=\"books.csv\""))
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "exportBooks"
)]
#[get("/books/export")]
pub async fn export_books(
    state: web::Data<HttpState>,
    query: web::Query<BooksQuery>,
) -> ApiResult<HttpResponse> {
    let request = admit(&state, query.into_inner(), CatalogueLimits::check_export)?;
    let books = state.catalogue.export(request).await?;

    let mut body = Vec::new();
    write_csv(&books, &mut body)
        .map_err(|err| Error::internal(format!("csv export failed: {err}")))?;
    info!(count = books.len(), bytes = body.len(), "catalogue exported");

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        ))
        .body(body))
}

/// Return a fresh random seed for clients that want a new catalogue.
#[utoipa::path(
    get,
    path = "/api/books/random-seed",
    responses(
        (status = 200, description = "Random seed as a JSON string", body = String, example = json!("2817301563"))
    ),
    tags = ["books"],
    operation_id = "randomSeed"
)]
#[get("/books/random-seed")]
pub async fn random_seed() -> web::Json<String> {
    web::Json(rand::random::<u32>().to_string())
}
