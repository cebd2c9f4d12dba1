//! Typed serde bindings for the billing API wire contract.
//!
//! The backend speaks camelCase JSON; every type here renames accordingly.
//! Monetary values are decimals on the wire and deserialized as `f64`;
//! this layer only displays them, it never does billing arithmetic.

use serde::{Deserialize, Serialize};

// ── Auth ─────────────────────────────────────────────────────────────

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    /// Echoed login name; absent in some deployments, in which case the
    /// submitted login name is used for the identity.
    pub username: Option<String>,
    pub role: String,
    pub full_name: String,
}

/// Payload of `POST /auth/register`, the public signup form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub pincode: String,
    pub aadhar_number: Option<String>,
    pub area_id: Option<i64>,
    pub advance_payment: Option<f64>,
}

// ── Customers & accounts ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i64,
    pub customer_number: Option<String>,
    pub username: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub aadhar_number: Option<String>,
}

/// Payload for admin-side customer create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub username: String,
    /// Only set on create; updates leave the credential untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub pincode: String,
    pub aadhar_number: Option<String>,
}

/// Reference to a customer by id, used inside nested payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub customer_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    pub account_id: i64,
    pub account_number: Option<String>,
    pub meter_number: Option<String>,
    pub connection_type: Option<String>,
    pub sanctioned_load: Option<f64>,
    pub connection_date: Option<String>,
    pub installation_address: Option<String>,
    pub tariff_category: Option<String>,
    pub is_active: Option<bool>,
    pub customer: Option<Customer>,
    /// Flattened convenience field on some list endpoints.
    pub customer_name: Option<String>,
}

/// Payload for admin-side account create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub customer: CustomerRef,
    pub connection_type: String,
    pub sanctioned_load: f64,
    pub connection_date: String,
    pub installation_address: String,
    pub tariff_category: String,
    pub is_active: bool,
}

/// Response of `GET /admin/accounts/next-meter`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextMeterNumber {
    pub meter_number: String,
}

// ── Meter readings ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReading {
    pub reading_id: i64,
    pub billing_month: Option<String>,
    pub reading_date: Option<String>,
    pub previous_reading: Option<i64>,
    pub current_reading: Option<i64>,
    pub units_consumed: Option<i64>,
    pub reading_type: Option<String>,
    pub remarks: Option<String>,
}

/// Payload of `POST /admin/readings`. Submitting a reading also triggers
/// bill generation for the account server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReading {
    pub account_id: i64,
    pub current_reading: i64,
    /// Billing cycle in `YYYY-MM` form.
    pub billing_month: String,
    pub reading_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

// ── Tariffs ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub tariff_id: i64,
    pub category: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub fixed_charge: Option<f64>,
    pub duty_rate: Option<f64>,
    #[serde(default)]
    pub slabs: Vec<TariffSlab>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSlab {
    pub slab_number: Option<i32>,
    pub min_units: Option<i64>,
    /// `None` means the slab is open-ended.
    pub max_units: Option<i64>,
    pub rate_per_unit: Option<f64>,
}

// ── Bills & payments ─────────────────────────────────────────────────

/// List item from `GET /customers/self/bills` and `.../bills/pending`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub bill_id: i64,
    pub invoice_number: Option<String>,
    pub bill_date: Option<String>,
    pub due_date: Option<String>,
    pub units_consumed: Option<i64>,
    pub net_payable: Option<f64>,
    pub balance_amount: Option<f64>,
    pub bill_status: Option<String>,
}

/// Full bill breakdown from `GET /customer/portal/bills/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDetail {
    pub bill_id: i64,
    pub account_id: Option<i64>,
    pub invoice_number: Option<String>,
    pub bill_month: Option<String>,
    pub bill_date: Option<String>,
    pub due_date: Option<String>,
    pub units_consumed: Option<i64>,
    pub energy_charges: Option<f64>,
    pub fixed_charges: Option<f64>,
    pub meter_rent: Option<f64>,
    pub electricity_duty: Option<f64>,
    pub other_charges: Option<f64>,
    pub subsidy_amount: Option<f64>,
    pub late_fee: Option<f64>,
    pub total_amount: Option<f64>,
    pub previous_due: Option<f64>,
    pub net_payable: Option<f64>,
    pub amount_paid: Option<f64>,
    pub balance_amount: Option<f64>,
    pub status: Option<String>,
}

/// Payload of `POST /payments`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub bill_id: i64,
    pub payment_amount: f64,
    /// Payment channel, e.g. `UPI`, `CARD`, `CASH`.
    pub payment_mode: String,
}

/// Payload of `POST /bills/generate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBillsRequest {
    pub billing_month: String,
}

/// Acknowledgement body used by several POST endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub message: Option<String>,
}

/// Response of the advance-payment endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceBalance {
    pub balance: Option<f64>,
    pub message: Option<String>,
}

// ── Complaints ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub complaint_id: i64,
    pub complaint_number: Option<String>,
    pub complaint_type: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub resolution: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Payload of `POST /customer/complaints`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub complaint_type: String,
    pub priority: String,
    pub subject: String,
    pub description: String,
}

/// Payload of `PUT /admin/complaints/{id}`: status/resolution update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

// ── Dashboards & reports ─────────────────────────────────────────────

/// Response of `GET /customers/self/summary`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub outstanding_amount: Option<f64>,
    pub last_bill_amount: Option<f64>,
    pub average_consumption: Option<f64>,
    pub next_due_date: Option<String>,
}

/// One month of usage from `GET /customers/self/consumption` and
/// `GET /admin/reports/consumption`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionPoint {
    pub year: i32,
    pub month: u32,
    pub units: i64,
}

/// Response of `GET /admin/reports/dashboard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_customers: i64,
    pub total_active_accounts: Option<i64>,
    pub new_customers_this_month: Option<i64>,
    pub new_connections_this_month: Option<i64>,
    pub total_billed_this_month: Option<f64>,
    pub total_collected_this_month: Option<f64>,
    pub total_outstanding: Option<f64>,
    pub units_consumed_this_month: Option<i64>,
    pub open_complaints: Option<i64>,
    pub in_progress_complaints: Option<i64>,
    pub resolved_today: Option<i64>,
    pub collection_efficiency: Option<f64>,
    pub bills_generated_this_month: Option<i64>,
    pub overdue_bills: Option<i64>,
}

/// One month of collections from `GET /admin/reports/collections`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPoint {
    pub year: i32,
    pub month: u32,
    pub total_amount: Option<f64>,
}

/// Response of `GET /admin/reports/bills/status-summary`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillStatusSummary {
    pub paid: i64,
    pub unpaid: i64,
    pub partially_paid: i64,
    pub overdue: i64,
}

// ── Admin users ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub user_id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub created_at: Option<String>,
}

/// Payload of `POST /admin/users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminUser {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Payload of `PATCH /admin/users/{id}/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatusUpdate {
    pub active: bool,
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_wire_shape() {
        let json = r#"{
            "token": "t1",
            "type": "Bearer",
            "userId": 12,
            "username": "admin1",
            "role": "admin",
            "fullName": "A One"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user_id, 12);
        assert_eq!(resp.username.as_deref(), Some("admin1"));
        assert_eq!(resp.role, "admin");
        assert_eq!(resp.full_name, "A One");
    }

    #[test]
    fn auth_response_tolerates_missing_username() {
        let json = r#"{"token":"t","userId":1,"role":"CUSTOMER","fullName":"C"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(resp.username.is_none());
    }

    #[test]
    fn bill_summary_parses_list_item() {
        let json = r#"{
            "billId": 301,
            "invoiceNumber": "INV/2026/07/0301",
            "billDate": "2026-07-01",
            "dueDate": "2026-07-15",
            "unitsConsumed": 240,
            "netPayable": 1874.50,
            "balanceAmount": 874.50,
            "billStatus": "PARTIALLY_PAID",
            "pdfPath": "/bills/301.pdf",
            "qrCodePath": null
        }"#;
        let bill: BillSummary = serde_json::from_str(json).unwrap();
        assert_eq!(bill.bill_id, 301);
        assert_eq!(bill.balance_amount, Some(874.50));
        assert_eq!(bill.bill_status.as_deref(), Some("PARTIALLY_PAID"));
    }

    #[test]
    fn payment_request_serializes_camel_case() {
        let req = PaymentRequest {
            bill_id: 301,
            payment_amount: 874.5,
            payment_mode: "UPI".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"billId\":301"));
        assert!(json.contains("\"paymentAmount\":874.5"));
        assert!(json.contains("\"paymentMode\":\"UPI\""));
    }

    #[test]
    fn new_reading_omits_empty_remarks() {
        let reading = NewReading {
            account_id: 5,
            current_reading: 1204,
            billing_month: "2026-08".into(),
            reading_type: "ACTUAL".into(),
            remarks: None,
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"accountId\":5"));
        assert!(json.contains("\"billingMonth\":\"2026-08\""));
        assert!(!json.contains("remarks"));
    }

    #[test]
    fn tariff_defaults_missing_slabs_to_empty() {
        let json = r#"{"tariffId":2,"category":"DOMESTIC","code":"D1"}"#;
        let tariff: Tariff = serde_json::from_str(json).unwrap();
        assert!(tariff.slabs.is_empty());
    }

    #[test]
    fn dashboard_metrics_parses_report_shape() {
        let json = r#"{
            "totalCustomers": 1280,
            "totalActiveAccounts": 1340,
            "newCustomersThisMonth": 12,
            "newConnectionsThisMonth": 9,
            "totalBilledThisMonth": 2150000.00,
            "totalCollectedThisMonth": 1870000.00,
            "totalOutstanding": 430000.00,
            "unitsConsumedThisMonth": 310540,
            "openComplaints": 14,
            "inProgressComplaints": 6,
            "resolvedToday": 3,
            "collectionEfficiency": 86.98,
            "billsGeneratedThisMonth": 1310,
            "overdueBills": 77
        }"#;
        let metrics: DashboardMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total_customers, 1280);
        assert_eq!(metrics.overdue_bills, Some(77));
        assert_eq!(metrics.collection_efficiency, Some(86.98));
    }

    #[test]
    fn register_request_serializes_full_profile() {
        let req = RegisterRequest {
            username: "meera.k".into(),
            password: "secret123".into(),
            email: "meera@example.com".into(),
            full_name: "Meera Kulkarni".into(),
            phone_number: "9800000001".into(),
            address: "14 MG Road".into(),
            city: "Pune".into(),
            state: Some("MH".into()),
            pincode: "411001".into(),
            aadhar_number: None,
            area_id: Some(3),
            advance_payment: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"fullName\":\"Meera Kulkarni\""));
        assert!(json.contains("\"phoneNumber\":\"9800000001\""));
        assert!(json.contains("\"areaId\":3"));
    }

    #[test]
    fn complaint_parses_with_nullable_fields() {
        let json = r#"{
            "complaintId": 18,
            "complaintNumber": "CMP-0018",
            "complaintType": "BILLING",
            "subject": "BILLING issue",
            "description": "Bill shows last month's units twice",
            "status": "OPEN",
            "priority": "HIGH",
            "resolution": null,
            "createdAt": "2026-08-20T10:15:00",
            "updatedAt": null
        }"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.complaint_id, 18);
        assert!(complaint.resolution.is_none());
        assert_eq!(complaint.priority.as_deref(), Some("HIGH"));
    }
}
