mod generated_routes;
