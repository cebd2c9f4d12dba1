//! Customer-facing screens: dashboard, bills, payments, usage, complaints.

use crate::api::types::{
    AdvanceBalance, BillDetail, BillSummary, Complaint, ConsumptionPoint, CustomerSummary,
    NewComplaint, PaymentRequest,
};
use crate::api::{ApiClient, ApiError};

/// View bindings for the customer portal.
pub struct CustomerPortal<'a> {
    api: &'a ApiClient,
}

impl<'a> CustomerPortal<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Dashboard quick summary: outstanding, last bill, average usage.
    pub async fn summary(&self) -> Result<CustomerSummary, ApiError> {
        self.api.get("/customers/self/summary").await
    }

    /// All bills for the logged-in customer.
    pub async fn bills(&self) -> Result<Vec<BillSummary>, ApiError> {
        self.api.get("/customers/self/bills").await
    }

    /// Bills with an open balance, payable right now.
    pub async fn pending_bills(&self) -> Result<Vec<BillSummary>, ApiError> {
        self.api.get("/customers/self/bills/pending").await
    }

    /// Full charge breakdown for one bill.
    pub async fn bill_detail(&self, bill_id: i64) -> Result<BillDetail, ApiError> {
        self.api
            .get(&format!("/customer/portal/bills/{bill_id}"))
            .await
    }

    /// Server-rendered invoice PDF.
    pub async fn bill_pdf(&self, bill_id: i64) -> Result<Vec<u8>, ApiError> {
        self.api
            .get_bytes(&format!("/customers/self/bills/{bill_id}/pdf"))
            .await
    }

    /// Payment QR image; `None` when the server has not generated one.
    pub async fn bill_qr(&self, bill_id: i64) -> Result<Option<Vec<u8>>, ApiError> {
        self.api
            .get_bytes_opt(&format!("/customers/self/bills/{bill_id}/qr"))
            .await
    }

    /// Record a payment against a bill.
    pub async fn pay(&self, bill_id: i64, amount: f64, mode: &str) -> Result<(), ApiError> {
        let request = PaymentRequest {
            bill_id,
            payment_amount: amount,
            payment_mode: mode.to_string(),
        };
        self.api.post_unit("/payments", &request).await
    }

    /// Current advance-payment balance.
    pub async fn advance_balance(&self) -> Result<AdvanceBalance, ApiError> {
        self.api.get("/customer/advance-payment").await
    }

    /// Top up the advance-payment balance.
    pub async fn add_advance(&self, amount: f64) -> Result<AdvanceBalance, ApiError> {
        self.api
            .post(
                "/customer/advance-payment",
                &serde_json::json!({ "amount": amount }),
            )
            .await
    }

    /// Monthly consumption history for the usage chart.
    pub async fn consumption(&self) -> Result<Vec<ConsumptionPoint>, ApiError> {
        self.api.get("/customers/self/consumption").await
    }

    /// Complaints raised by this customer.
    pub async fn complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        self.api.get("/customers/self/complaints").await
    }

    /// Raise a new complaint.
    pub async fn raise_complaint(&self, complaint: &NewComplaint) -> Result<(), ApiError> {
        self.api.post_unit("/customer/complaints", complaint).await
    }
}

// ── Tests ───────────────────────────────────────────────────────────
