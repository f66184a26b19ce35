use actix_web::{HttpResponse, Responder};
use serde_json::{json, Value};

pub async fn api_docs() -> impl Responder {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(openapi_document())
}

/// OpenAPI 3 description of the HTTP surface.
pub fn openapi_document() -> Value {
  let rides = json!({
    "type": "array",
    "items": { "$ref": "#/components/schemas/Ride" }
  });
  let error = json!({ "$ref": "#/components/schemas/Error" });

  json!({
    "openapi": "3.0.3",
    "info": {
      "title": "Ride records",
      "description": "Create, list and fetch ride records.",
      "version": env!("CARGO_PKG_VERSION")
    },
    "paths": {
      "/health": {
        "get": {
          "summary": "Liveness check",
          "responses": {
            "200": {
              "description": "Service is up",
              "content": { "text/plain": { "schema": { "type": "string" } } }
            }
          }
        }
      },
      "/rides": {
        "post": {
          "summary": "Create a ride",
          "requestBody": {
            "required": true,
            "content": {
              "application/json": {
                "schema": { "$ref": "#/components/schemas/CreateRide" }
              }
            }
          },
          "responses": {
            "201": response("The created ride, wrapped in a list", &rides),
            "400": response("VALIDATION_ERROR", &error),
            "500": response("SERVER_ERROR", &error)
          }
        },
        "get": {
          "summary": "List rides",
          "parameters": [
            query_parameter("page", "1-based page number; omit to list every ride"),
            query_parameter("limit", "Page size, defaults to 10")
          ],
          "responses": {
            "200": response("Rides in insertion order", &rides),
            "404": response("RIDES_NOT_FOUND", &error),
            "500": response("SERVER_ERROR", &error)
          }
        }
      },
      "/rides/{id}": {
        "get": {
          "summary": "Fetch a ride by id",
          "parameters": [{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer" }
          }],
          "responses": {
            "200": response("The matching ride, wrapped in a list", &rides),
            "404": response("RIDES_NOT_FOUND", &error),
            "500": response("SERVER_ERROR", &error)
          }
        }
      }
    },
    "components": {
      "schemas": {
        "CreateRide": {
          "type": "object",
          "required": [
            "start_lat", "start_long", "end_lat", "end_long",
            "rider_name", "driver_name", "driver_vehicle"
          ],
          "properties": {
            "start_lat": coordinate(90),
            "start_long": coordinate(180),
            "end_lat": coordinate(90),
            "end_long": coordinate(180),
            "rider_name": { "type": "string", "minLength": 1 },
            "driver_name": { "type": "string", "minLength": 1 },
            "driver_vehicle": { "type": "string", "minLength": 1 }
          }
        },
        "Ride": {
          "type": "object",
          "properties": {
            "rideID": { "type": "integer" },
            "startLat": { "type": "number" },
            "startLong": { "type": "number" },
            "endLat": { "type": "number" },
            "endLong": { "type": "number" },
            "riderName": { "type": "string" },
            "driverName": { "type": "string" },
            "driverVehicle": { "type": "string" },
            "created": { "type": "string", "format": "date-time" }
          }
        },
        "Error": {
          "type": "object",
          "properties": {
            "error_code": {
              "type": "string",
              "enum": ["VALIDATION_ERROR", "SERVER_ERROR", "RIDES_NOT_FOUND"]
            },
            "message": { "type": "string" },
            "status": { "type": "integer" }
          }
        }
      }
    }
  })
}

fn response(description: &str, schema: &Value) -> Value {
  json!({
    "description": description,
    "content": { "application/json": { "schema": schema } }
  })
}

fn query_parameter(name: &str, description: &str) -> Value {
  json!({
    "name": name,
    "in": "query",
    "required": false,
    "description": description,
    "schema": { "type": "integer", "minimum": 1 }
  })
}

fn coordinate(bound: i32) -> Value {
  json!({ "type": "number", "minimum": -bound, "maximum": bound })
}
