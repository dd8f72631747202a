//! # Query Parameters
//!
//! Assembles a complete C4C-style query string around a built filter.

use odata_query::{ODataQueryParam, OrderField, ResponseFormat, filter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut f = filter();
    f.field("LifeCycleStatusCode").in_values(["2", "3"]);

    let mut param = ODataQueryParam::new_param();
    param
        .format(ResponseFormat::Json)?
        .filter(&f)
        .select(["ObjectID", "ID", "Name"])
        .orderby_multi(&[OrderField::desc("CreationDateTime"), OrderField::asc("ID")])
        .search("sap", true)
        .expand(["ServiceRequestItem"], false)
        .top(50)
        .inlinecount(true);

    println!("/sap/c4c/odata/v1/c4codataapi/ServiceRequestCollection?{}", param);

    if let Err(e) = param.format(ResponseFormat::Xml) {
        println!("rejected: {}", e);
    }

    Ok(())
}
