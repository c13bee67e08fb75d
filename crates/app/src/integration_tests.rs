//! Integration tests for the full dashboard pipeline.
//!
//! Tests: Service call → Store commit → Change feed → ResourceCache
//!
//! Verifies:
//! - Role guards hold across every workflow
//! - Stock validation is atomic with the stock update
//! - Secondary effects (alerts, audit, email/SMS) fire without ever failing
//!   the primary mutation
//! - Caches converge by refetch and freeze after unmount

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use smartshelf_alerts::Severity;
    use smartshelf_auth::{Role, Session};
    use smartshelf_core::{DomainError, Entity, UserId, VendorId};
    use smartshelf_forecast::NO_USAGE_SENTINEL;
    use smartshelf_inventory::{MovementKind, NewTransaction};
    use smartshelf_notify::{Notifier, RecordingGateway, SmsKind, VendorEmailKind};
    use smartshelf_products::NewProduct;
    use smartshelf_purchasing::{Decision, NewOrderItem, NewStockRequest, OrderStatus};
    use smartshelf_reports::{parse_csv, write_csv};
    use smartshelf_store::{InMemoryStore, Profile};
    use smartshelf_vendors::NewVendor;

    use crate::error::AppError;
    use crate::services::Services;

    fn setup() -> (Services, RecordingGateway) {
        let gateway = RecordingGateway::new();
        let notifier = Notifier::new(Arc::new(gateway.clone()), Arc::new(gateway.clone()));
        let services =
            Services::new(InMemoryStore::new(), notifier).with_ops_phone("+1-555-0100");
        (services, gateway)
    }

    fn admin() -> Session {
        Session::internal(UserId::new(), "Asha Admin", "asha@example.com", Role::Admin)
    }

    fn manager() -> Session {
        Session::internal(
            UserId::new(),
            "Wren Manager",
            "wren@example.com",
            Role::WarehouseManager,
        )
    }

    fn vendor_session(vendor_id: VendorId) -> Session {
        Session::vendor(UserId::new(), "Sam Vendor", "sam@acme.example", vendor_id)
    }

    fn new_product(sku: &str, stock: i64, reorder: i64, vendor_id: Option<VendorId>) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            name: format!("Product {sku}"),
            description: None,
            category_id: None,
            vendor_id,
            price: 4.0,
            current_stock: stock,
            reorder_level: reorder,
            image_url: None,
        }
    }

    fn new_vendor(name: &str) -> NewVendor {
        NewVendor {
            name: name.to_string(),
            email: format!("sales@{}.example", name.to_lowercase()),
            phone: None,
            address: None,
            performance: 85,
        }
    }

    #[test]
    fn created_product_reaches_a_mounted_cache() {
        let (services, _) = setup();
        let session = manager();

        let mut cache = services.mount_products(&session).unwrap();
        assert!(cache.rows().is_empty());

        services
            .create_product(&session, new_product("BOX-1", 10, 3, None))
            .unwrap();

        assert!(cache.pump() >= 1);
        assert_eq!(cache.rows().len(), 1);
        assert_eq!(cache.rows()[0].product.sku().as_str(), "BOX-1");
    }

    #[test]
    fn unmounted_cache_stays_frozen() {
        let (services, _) = setup();
        let session = manager();

        let mut cache = services.mount_products(&session).unwrap();
        cache.unmount();

        services
            .create_product(&session, new_product("BOX-1", 10, 3, None))
            .unwrap();

        assert_eq!(cache.pump(), 0);
        assert!(cache.rows().is_empty());
    }

    #[test]
    fn vendors_cannot_touch_the_catalog() {
        let (services, _) = setup();
        let session = vendor_session(VendorId::new());

        let err = services
            .create_product(&session, new_product("BOX-1", 10, 3, None))
            .unwrap_err();
        assert_eq!(err, AppError::Domain(DomainError::Unauthorized));
    }

    #[test]
    fn only_admin_deletes_products() {
        let (services, _) = setup();
        let admin = admin();
        let manager = manager();

        let product = services
            .create_product(&manager, new_product("BOX-1", 10, 3, None))
            .unwrap();

        let err = services.delete_product(&manager, *product.id()).unwrap_err();
        assert_eq!(err, AppError::Domain(DomainError::Unauthorized));

        services.delete_product(&admin, *product.id()).unwrap();
        assert!(services.store().get_product(*product.id()).unwrap().is_none());
    }

    #[test]
    fn oversized_stock_out_is_rejected_with_no_side_effects() {
        let (services, gateway) = setup();
        let session = manager();
        let product = services
            .create_product(&session, new_product("BOX-1", 5, 2, None))
            .unwrap();

        let err = services
            .record_transaction(
                &session,
                NewTransaction {
                    kind: MovementKind::StockOut,
                    product_id: *product.id(),
                    quantity: 8,
                    reference: None,
                    notes: None,
                },
            )
            .unwrap_err();

        assert_eq!(
            err,
            AppError::Domain(DomainError::InsufficientStock {
                requested: 8,
                available: 5
            })
        );
        assert_eq!(
            services
                .store()
                .get_product(*product.id())
                .unwrap()
                .unwrap()
                .current_stock(),
            5
        );
        assert!(services.alerts(&session).unwrap().is_empty());
        assert!(gateway.texts().is_empty());
    }

    #[test]
    fn draining_stock_raises_critical_alert_and_sms() {
        let (services, gateway) = setup();
        let session = manager();
        let product = services
            .create_product(&session, new_product("BOX-1", 5, 2, None))
            .unwrap();

        services
            .record_transaction(
                &session,
                NewTransaction {
                    kind: MovementKind::StockOut,
                    product_id: *product.id(),
                    quantity: 5,
                    reference: Some("SO-99".to_string()),
                    notes: None,
                },
            )
            .unwrap();

        let alerts = services.alerts(&session).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title(), "Out of Stock");
        assert_eq!(alerts[0].severity(), Severity::Critical);

        let texts = gateway.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].kind, SmsKind::OutOfStock);
    }

    #[test]
    fn purchase_order_lifecycle_with_guards() {
        let (services, gateway) = setup();
        let staff = manager();
        let vendor = services.create_vendor(&staff, new_vendor("Acme")).unwrap();
        let counterparty = vendor_session(*vendor.id());

        let product = services
            .create_product(&staff, new_product("BOX-1", 2, 5, Some(*vendor.id())))
            .unwrap();
        let order = services
            .create_purchase_order(
                &staff,
                *vendor.id(),
                vec![NewOrderItem {
                    product_id: *product.id(),
                    quantity: 20,
                    unit_price: 4.0,
                }],
            )
            .unwrap();
        assert_eq!(order.total_amount(), 80.0);

        let emails = gateway.emails();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].kind, VendorEmailKind::PurchaseOrder);
        assert_eq!(emails[0].to, "sales@acme.example");

        // A different vendor cannot answer.
        let err = services
            .respond_to_purchase_order(
                &vendor_session(VendorId::new()),
                *order.id(),
                Decision::Approve,
            )
            .unwrap_err();
        assert_eq!(err, AppError::Domain(DomainError::Unauthorized));

        let order = services
            .respond_to_purchase_order(&counterparty, *order.id(), Decision::Reject)
            .unwrap();
        assert_eq!(order.status(), OrderStatus::Rejected);

        // Rejected is terminal for everyone.
        let err = services
            .complete_purchase_order(&staff, *order.id())
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Conflict(_))));
    }

    #[test]
    fn order_approval_alerts_the_creator() {
        let (services, _) = setup();
        let staff = manager();
        let vendor = services.create_vendor(&staff, new_vendor("Acme")).unwrap();
        let counterparty = vendor_session(*vendor.id());
        let product = services
            .create_product(&staff, new_product("BOX-1", 2, 5, Some(*vendor.id())))
            .unwrap();

        let order = services
            .create_purchase_order(
                &staff,
                *vendor.id(),
                vec![NewOrderItem {
                    product_id: *product.id(),
                    quantity: 10,
                    unit_price: 4.0,
                }],
            )
            .unwrap();
        services
            .respond_to_purchase_order(&counterparty, *order.id(), Decision::Approve)
            .unwrap();

        let alerts = services.alerts(&staff).unwrap();
        assert!(alerts.iter().any(|a| a.title() == "Purchase Order Approved"));

        let completed = services
            .complete_purchase_order(&staff, *order.id())
            .unwrap();
        assert_eq!(completed.status(), OrderStatus::Completed);
    }

    #[test]
    fn stock_request_fans_out_to_every_vendor_user() {
        let (services, gateway) = setup();
        let staff = manager();
        let vendor = services.create_vendor(&staff, new_vendor("Acme")).unwrap();

        let first = vendor_session(*vendor.id());
        let second = vendor_session(*vendor.id());
        for session in [&first, &second] {
            services
                .register_profile(Profile {
                    user_id: session.user_id,
                    full_name: session.full_name.clone(),
                    email: session.email.clone(),
                    role: Role::Vendor,
                    vendor_id: session.vendor_id,
                })
                .unwrap();
        }

        let request = services
            .create_stock_request(
                &staff,
                NewStockRequest {
                    product_id: None,
                    vendor_id: *vendor.id(),
                    quantity: 40,
                    notes: Some("weekend rush".to_string()),
                },
            )
            .unwrap();

        assert_eq!(services.alerts(&first).unwrap().len(), 1);
        assert_eq!(services.alerts(&second).unwrap().len(), 1);
        assert_eq!(gateway.emails()[0].kind, VendorEmailKind::StockRequest);

        // One-shot response, with notes reaching the requester.
        services
            .respond_to_stock_request(
                &first,
                *request.id(),
                Decision::Reject,
                Some("out of season".to_string()),
            )
            .unwrap();
        let err = services
            .respond_to_stock_request(&first, *request.id(), Decision::Approve, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Conflict(_))));

        let staff_alerts = services.alerts(&staff).unwrap();
        assert!(staff_alerts
            .iter()
            .any(|a| a.title() == "Stock Request Rejected" && a.message().contains("out of season")));
    }

    #[test]
    fn restock_generation_groups_orders_by_vendor() {
        let (services, _) = setup();
        let staff = manager();
        let vendor = services.create_vendor(&staff, new_vendor("Acme")).unwrap();

        // deficit 15 + safety 10 + buffer 6 = 31
        services
            .create_product(&staff, new_product("LOW-1", 5, 20, Some(*vendor.id())))
            .unwrap();
        // No vendor: suggested but skipped at order generation.
        services
            .create_product(&staff, new_product("LOW-2", 0, 10, None))
            .unwrap();
        // Healthy: no suggestion at all.
        services
            .create_product(&staff, new_product("OK-1", 100, 10, Some(*vendor.id())))
            .unwrap();

        let suggestions = services.restock_suggestions(&staff).unwrap();
        assert_eq!(suggestions.len(), 2);
        let low1 = suggestions.iter().find(|s| s.sku == "LOW-1").unwrap();
        assert_eq!(low1.suggested_quantity, 31);

        let orders = services
            .generate_restock_orders(&staff, &suggestions)
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].vendor_id(), *vendor.id());
        assert_eq!(orders[0].items()[0].quantity, 31);
    }

    #[test]
    fn forecast_reports_sentinel_for_unused_stock() {
        let (services, _) = setup();
        let staff = manager();
        services
            .create_product(&staff, new_product("BOX-1", 50, 5, None))
            .unwrap();

        let rows = services.demand_forecast(&staff).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].days_until_stockout, NO_USAGE_SENTINEL);
        assert_eq!(rows[0].confidence, 60);

        let table = services.forecast_report(&staff).unwrap();
        assert_eq!(table.rows[0][4], "N/A");
    }

    #[test]
    fn vendors_only_see_their_own_rows() {
        let (services, _) = setup();
        let staff = manager();
        let vendor = services.create_vendor(&staff, new_vendor("Acme")).unwrap();

        services
            .create_product(&staff, new_product("MINE-1", 10, 2, Some(*vendor.id())))
            .unwrap();
        services
            .create_product(&staff, new_product("OTHER-1", 10, 2, None))
            .unwrap();

        let session = vendor_session(*vendor.id());
        let cache = services.mount_products(&session).unwrap();
        assert_eq!(cache.rows().len(), 1);
        assert_eq!(cache.rows()[0].product.sku().as_str(), "MINE-1");

        let stats = services.dashboard_stats(&session).unwrap();
        assert_eq!(stats.total_products, 1);
    }

    #[test]
    fn dashboard_health_score_rounds_the_healthy_share() {
        let (services, _) = setup();
        let staff = manager();

        assert_eq!(services.dashboard_stats(&staff).unwrap().inventory_health, 100);

        services
            .create_product(&staff, new_product("OK-1", 50, 5, None))
            .unwrap();
        services
            .create_product(&staff, new_product("OK-2", 50, 5, None))
            .unwrap();
        services
            .create_product(&staff, new_product("LOW-1", 3, 5, None))
            .unwrap();

        let stats = services.dashboard_stats(&staff).unwrap();
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 0);
        // 2 of 3 healthy = 66.7 -> 67
        assert_eq!(stats.inventory_health, 67);
    }

    #[test]
    fn audit_trail_is_admin_only_and_newest_first() {
        let (services, _) = setup();
        let admin = admin();
        let manager = manager();

        services
            .create_product(&manager, new_product("BOX-1", 10, 3, None))
            .unwrap();
        services
            .create_product(&manager, new_product("BOX-2", 10, 3, None))
            .unwrap();

        let err = services.audit_logs(&manager).unwrap_err();
        assert_eq!(err, AppError::Domain(DomainError::Unauthorized));

        let logs = services.audit_logs(&admin).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].details().contains("BOX-2"));
        assert_eq!(logs[0].user_name(), "Wren Manager");
    }

    #[test]
    fn alert_dismissal_requires_visibility() {
        let (services, _) = setup();
        let staff = manager();
        let vendor = services.create_vendor(&staff, new_vendor("Acme")).unwrap();
        let counterparty = vendor_session(*vendor.id());
        services
            .register_profile(Profile {
                user_id: counterparty.user_id,
                full_name: counterparty.full_name.clone(),
                email: counterparty.email.clone(),
                role: Role::Vendor,
                vendor_id: counterparty.vendor_id,
            })
            .unwrap();

        services
            .create_stock_request(
                &staff,
                NewStockRequest {
                    product_id: None,
                    vendor_id: *vendor.id(),
                    quantity: 10,
                    notes: None,
                },
            )
            .unwrap();

        let targeted = services.alerts(&counterparty).unwrap().remove(0);
        let intruder = manager();
        let err = services
            .dismiss_alert(&intruder, *targeted.id())
            .unwrap_err();
        assert_eq!(err, AppError::Domain(DomainError::Unauthorized));

        services.dismiss_alert(&counterparty, *targeted.id()).unwrap();
        assert!(services.alerts(&counterparty).unwrap().is_empty());
    }

    #[test]
    fn csv_import_round_trips_through_export() {
        let (services, _) = setup();
        let staff = manager();

        let csv_text = "sku,name,price,current_stock,reorder_level\n\
                        BOX-1,\"Boxes, heavy duty\",2.50,40,10\n\
                        TAPE-1,Packing Tape,1.25,0,5\n";
        let created = services.import_products_csv(&staff, csv_text).unwrap();
        assert_eq!(created.len(), 2);

        let exported = write_csv(&services.inventory_report(&staff).unwrap()).unwrap();
        let (_, rows) = parse_csv(&exported).unwrap();
        assert!(rows.iter().any(|r| r[1] == "Boxes, heavy duty"));
        assert!(rows.iter().any(|r| r[7] == "Out of Stock"));
    }

    #[test]
    fn bad_csv_import_is_rejected() {
        let (services, _) = setup();
        let staff = manager();

        let missing_column = "sku,name,price\nBOX-1,Box,2.5\n";
        assert!(services.import_products_csv(&staff, missing_column).is_err());

        let bad_number = "sku,name,price,current_stock,reorder_level\nBOX-1,Box,abc,1,1\n";
        assert!(services.import_products_csv(&staff, bad_number).is_err());
    }
}
