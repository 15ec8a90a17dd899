use utoipa::OpenApi;

use crate::api::determining;
use crate::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        determining::probable_pastime_task1,
        determining::unpopular_pastime_task1,
    ),
    components(schemas(ErrorBody)),
    tags(
        (name = "Determining", description = "Pastime determinations relayed to the analysis backend")
    )
)]
pub struct ApiDoc;
