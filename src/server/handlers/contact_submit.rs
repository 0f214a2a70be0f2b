use crate::collections::Collection;
use crate::server::helpers::nonempty;
use crate::server::proto::{SubmitContactRequest, SubmitContactResponse};
use crate::server::structured_error::to_error_json;
use crate::services::{ContactForm, ContentServices};
use tonic::{Response, Status};

pub async fn submit_contact(
    services: &ContentServices,
    req: SubmitContactRequest,
) -> Result<Response<SubmitContactResponse>, Status> {
    let form = ContactForm {
        name: req.name,
        email: req.email,
        phone: nonempty(&req.phone),
        company: nonempty(&req.company),
        subject: nonempty(&req.subject),
        message: req.message,
        service_interest: nonempty(&req.service_interest),
    };

    match services.submit_contact(form).await {
        Ok(id) => Ok(Response::new(SubmitContactResponse {
            success: true,
            error: String::new(),
            id,
        })),
        Err(e) => Ok(Response::new(SubmitContactResponse {
            success: false,
            error: to_error_json(Collection::Contacts.as_str(), &e),
            id: String::new(),
        })),
    }
}
