//! Admin screens: customers, accounts, readings, bills, tariffs, users,
//! complaints, and reports.

use crate::api::types::{
    Acknowledgement, AccountPayload, AdminStatusUpdate, AdminUser, AdvanceBalance,
    BillStatusSummary, CollectionPoint, Complaint, ComplaintUpdate, ConsumptionPoint, Customer,
    CustomerPayload, DashboardMetrics, GenerateBillsRequest, MeterReading, NewAdminUser,
    NewReading, NextMeterNumber, ServiceAccount, Tariff,
};
use crate::api::{ApiClient, ApiError};

/// View bindings for the admin portal.
pub struct AdminPortal<'a> {
    api: &'a ApiClient,
}

impl<'a> AdminPortal<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    // ── Customers ────────────────────────────────────────────────

    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.api.get("/admin/customers").await
    }

    pub async fn create_customer(&self, payload: &CustomerPayload) -> Result<Customer, ApiError> {
        self.api.post("/admin/customers", payload).await
    }

    pub async fn update_customer(
        &self,
        customer_id: i64,
        payload: &CustomerPayload,
    ) -> Result<Customer, ApiError> {
        self.api
            .put(&format!("/admin/customers/{customer_id}"), payload)
            .await
    }

    pub async fn delete_customer(&self, customer_id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/admin/customers/{customer_id}"))
            .await
    }

    /// Record an advance payment on a customer's behalf.
    pub async fn record_advance(
        &self,
        customer_id: i64,
        amount: f64,
    ) -> Result<AdvanceBalance, ApiError> {
        self.api
            .post(
                &format!("/admin/customers/{customer_id}/advance-payment"),
                &serde_json::json!({ "amount": amount }),
            )
            .await
    }

    // ── Service accounts ─────────────────────────────────────────

    pub async fn accounts(&self) -> Result<Vec<ServiceAccount>, ApiError> {
        self.api.get("/admin/accounts").await
    }

    pub async fn create_account(
        &self,
        payload: &AccountPayload,
    ) -> Result<ServiceAccount, ApiError> {
        self.api.post("/admin/accounts", payload).await
    }

    pub async fn update_account(
        &self,
        account_id: i64,
        payload: &AccountPayload,
    ) -> Result<ServiceAccount, ApiError> {
        self.api
            .put(&format!("/admin/accounts/{account_id}"), payload)
            .await
    }

    pub async fn deactivate_account(&self, account_id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/admin/accounts/{account_id}"))
            .await
    }

    /// Next free meter number, offered when creating a connection.
    pub async fn next_meter_number(&self) -> Result<NextMeterNumber, ApiError> {
        self.api.get("/admin/accounts/next-meter").await
    }

    // ── Meter readings & bills ───────────────────────────────────

    pub async fn readings(&self, account_id: i64) -> Result<Vec<MeterReading>, ApiError> {
        self.api
            .get(&format!("/admin/readings/account/{account_id}"))
            .await
    }

    /// Submit a reading; the server also generates the bill for it.
    pub async fn add_reading(&self, reading: &NewReading) -> Result<(), ApiError> {
        self.api.post_unit("/admin/readings", reading).await
    }

    /// Batch bill generation for a billing cycle (`YYYY-MM`).
    pub async fn generate_bills(&self, billing_month: &str) -> Result<Acknowledgement, ApiError> {
        self.api
            .post(
                "/bills/generate",
                &GenerateBillsRequest {
                    billing_month: billing_month.to_string(),
                },
            )
            .await
    }

    // ── Tariffs ──────────────────────────────────────────────────

    pub async fn tariffs(&self) -> Result<Vec<Tariff>, ApiError> {
        self.api.get("/tariffs").await
    }

    // ── Admin users ──────────────────────────────────────────────

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.api.get("/admin/users").await
    }

    pub async fn create_admin_user(&self, payload: &NewAdminUser) -> Result<AdminUser, ApiError> {
        self.api.post("/admin/users", payload).await
    }

    pub async fn set_admin_status(&self, user_id: i64, active: bool) -> Result<AdminUser, ApiError> {
        self.api
            .patch(
                &format!("/admin/users/{user_id}/status"),
                &AdminStatusUpdate { active },
            )
            .await
    }

    // ── Complaints ───────────────────────────────────────────────

    pub async fn complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        self.api.get("/admin/complaints").await
    }

    pub async fn update_complaint(
        &self,
        complaint_id: i64,
        update: &ComplaintUpdate,
    ) -> Result<Complaint, ApiError> {
        self.api
            .put(&format!("/admin/complaints/{complaint_id}"), update)
            .await
    }

    // ── Reports ──────────────────────────────────────────────────

    pub async fn dashboard(&self) -> Result<DashboardMetrics, ApiError> {
        self.api.get("/admin/reports/dashboard").await
    }

    pub async fn collections(&self) -> Result<Vec<CollectionPoint>, ApiError> {
        self.api.get("/admin/reports/collections").await
    }

    pub async fn consumption(&self) -> Result<Vec<ConsumptionPoint>, ApiError> {
        self.api.get("/admin/reports/consumption").await
    }

    pub async fn bill_status_summary(&self) -> Result<BillStatusSummary, ApiError> {
        self.api.get("/admin/reports/bills/status-summary").await
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::CustomerRef;
    use crate::session::SessionStore;
    use std::sync::Arc;
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> (TempDir, ApiClient) {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(SessionStore::open(tmp.path()).unwrap());
        store.set_token("tok").unwrap();
        let client = ApiClient::new(&server.uri(), 5, store).unwrap();
        (tmp, client)
    }

    fn customer_payload(password: Option<&str>) -> CustomerPayload {
        CustomerPayload {
            username: "meera.k".into(),
            password: password.map(Into::into),
            email: "meera@example.com".into(),
            full_name: "Meera Kulkarni".into(),
            phone_number: "9800000001".into(),
            address: "14 MG Road".into(),
            city: "Pune".into(),
            state: Some("MH".into()),
            pincode: "411001".into(),
            aadhar_number: None,
        }
    }

    #[tokio::test]
    async fn create_customer_posts_profile_with_credential() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/customers"))
            .and(body_json(serde_json::json!({
                "username": "meera.k",
                "password": "welcome1",
                "email": "meera@example.com",
                "fullName": "Meera Kulkarni",
                "phoneNumber": "9800000001",
                "address": "14 MG Road",
                "city": "Pune",
                "state": "MH",
                "pincode": "411001",
                "aadharNumber": null,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "customerId": 71,
                "customerNumber": "CUST-0071",
                "fullName": "Meera Kulkarni",
            })))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let customer = portal
            .create_customer(&customer_payload(Some("welcome1")))
            .await
            .unwrap();
        assert_eq!(customer.customer_id, 71);
    }

    #[tokio::test]
    async fn update_customer_omits_credential() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("PUT"))
            .and(path("/admin/customers/71"))
            .and(body_json(serde_json::json!({
                "username": "meera.k",
                "email": "meera@example.com",
                "fullName": "Meera Kulkarni",
                "phoneNumber": "9800000001",
                "address": "14 MG Road",
                "city": "Pune",
                "state": "MH",
                "pincode": "411001",
                "aadharNumber": null,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "customerId": 71,
                "fullName": "Meera Kulkarni",
            })))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let customer = portal
            .update_customer(71, &customer_payload(None))
            .await
            .unwrap();
        assert_eq!(customer.customer_id, 71);
    }

    #[tokio::test]
    async fn record_advance_posts_amount_for_customer() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/customers/71/advance-payment"))
            .and(body_json(serde_json::json!({"amount": 500.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "balance": 1250.0,
                "message": "Advance payment recorded",
            })))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let resp = portal.record_advance(71, 500.0).await.unwrap();
        assert_eq!(resp.balance, Some(1250.0));
    }

    #[tokio::test]
    async fn create_account_posts_customer_ref() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/accounts"))
            .and(body_json(serde_json::json!({
                "customer": {"customerId": 71},
                "connectionType": "DOMESTIC",
                "sanctionedLoad": 5.0,
                "connectionDate": "2026-08-29",
                "installationAddress": "14 MG Road",
                "tariffCategory": "DOMESTIC",
                "isActive": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "accountId": 205,
                "accountNumber": "ACC-0205",
                "meterNumber": "MTR-10235",
                "isActive": true,
            })))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let account = portal
            .create_account(&AccountPayload {
                customer: CustomerRef { customer_id: 71 },
                connection_type: "DOMESTIC".into(),
                sanctioned_load: 5.0,
                connection_date: "2026-08-29".into(),
                installation_address: "14 MG Road".into(),
                tariff_category: "DOMESTIC".into(),
                is_active: true,
            })
            .await
            .unwrap();
        assert_eq!(account.meter_number.as_deref(), Some("MTR-10235"));
    }

    #[tokio::test]
    async fn deactivate_account_and_delete_customer_issue_deletes() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/admin/accounts/205"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/admin/customers/71"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        portal.deactivate_account(205).await.unwrap();
        portal.delete_customer(71).await.unwrap();
    }

    #[tokio::test]
    async fn next_meter_number_decodes_suggestion() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/admin/accounts/next-meter"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"meterNumber": "MTR-10236"})),
            )
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let next = portal.next_meter_number().await.unwrap();
        assert_eq!(next.meter_number, "MTR-10236");
    }

    #[tokio::test]
    async fn add_reading_posts_cycle_payload() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/admin/readings"))
            .and(body_json(serde_json::json!({
                "accountId": 5,
                "currentReading": 1204,
                "billingMonth": "2026-08",
                "readingType": "ACTUAL",
            })))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        portal
            .add_reading(&NewReading {
                account_id: 5,
                current_reading: 1204,
                billing_month: "2026-08".into(),
                reading_type: "ACTUAL".into(),
                remarks: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn generate_bills_returns_acknowledgement() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/bills/generate"))
            .and(body_json(serde_json::json!({"billingMonth": "2026-08"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "Generated 1310 bills"})),
            )
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let ack = portal.generate_bills("2026-08").await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Generated 1310 bills"));
    }

    #[tokio::test]
    async fn set_admin_status_patches_flag() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/admin/users/4/status"))
            .and(body_json(serde_json::json!({"active": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": 4,
                "username": "ops2",
                "fullName": "Ops Two",
                "active": false,
            })))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let user = portal.set_admin_status(4, false).await.unwrap();
        assert_eq!(user.active, Some(false));
    }

    #[tokio::test]
    async fn tariffs_decode_with_slabs() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/tariffs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "tariffId": 2,
                "category": "DOMESTIC",
                "code": "D1",
                "fixedCharge": 110.0,
                "dutyRate": 0.16,
                "slabs": [
                    {"slabNumber": 1, "minUnits": 0, "maxUnits": 100, "ratePerUnit": 3.44},
                    {"slabNumber": 2, "minUnits": 101, "maxUnits": null, "ratePerUnit": 7.34}
                ]
            }])))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let tariffs = portal.tariffs().await.unwrap();
        assert_eq!(tariffs[0].slabs.len(), 2);
        assert!(tariffs[0].slabs[1].max_units.is_none());
    }

    #[tokio::test]
    async fn update_complaint_resolves_with_message() {
        let server = MockServer::start().await;
        let (_tmp, client) = test_client(&server).await;

        Mock::given(method("PUT"))
            .and(path("/admin/complaints/18"))
            .and(body_json(serde_json::json!({
                "status": "RESOLVED",
                "resolution": "Duplicate charge reversed",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "complaintId": 18,
                "status": "RESOLVED",
                "resolution": "Duplicate charge reversed",
            })))
            .mount(&server)
            .await;

        let portal = AdminPortal::new(&client);
        let complaint = portal
            .update_complaint(
                18,
                &ComplaintUpdate {
                    status: "RESOLVED".into(),
                    resolution: Some("Duplicate charge reversed".into()),
                    assigned_to: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(complaint.status.as_deref(), Some("RESOLVED"));
    }
}
